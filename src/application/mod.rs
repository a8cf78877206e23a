pub mod address_service;
pub mod dto;
pub mod mapper;
