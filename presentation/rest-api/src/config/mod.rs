pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod env;
pub mod product_service_config;
pub mod server_config;
pub mod stock_config;
