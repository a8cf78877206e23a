pub mod address;
pub mod audit;
pub mod errors;
pub mod user;
