pub mod client;
pub mod dto;
pub mod stock_source;
