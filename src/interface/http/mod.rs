pub mod addresses_handler;
pub mod problem;
