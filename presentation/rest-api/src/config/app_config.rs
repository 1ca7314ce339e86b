use poem::middleware::Cors;
use product_service::client::ProductServiceClientConfig;

use super::env::ConfigError;
use super::stock_config::StockConfig;
use super::{cors_config, product_service_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub stock: StockConfig,
    pub product_service: ProductServiceClientConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            stock: StockConfig::from_env()?,
            product_service: product_service_config::from_env()?,
        })
    }
}
