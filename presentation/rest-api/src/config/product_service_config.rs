use std::time::Duration;

use product_service::client::ProductServiceClientConfig;

use super::env::{ConfigError, parse_or, read_var};

/// Load the upstream product service settings.
///
/// Environment variables:
/// - PRODUCT_SERVICE_URL: Base URL of the product service (default: "http://localhost:8081")
/// - PRODUCT_SERVICE_TIMEOUT_SECS: Per-request timeout in seconds (default: 30)
pub fn from_env() -> Result<ProductServiceClientConfig, ConfigError> {
    let defaults = ProductServiceClientConfig::default();
    let base_url = read_var("PRODUCT_SERVICE_URL").unwrap_or(defaults.base_url);
    let timeout_secs = parse_or(
        "PRODUCT_SERVICE_TIMEOUT_SECS",
        read_var("PRODUCT_SERVICE_TIMEOUT_SECS"),
        defaults.timeout.as_secs(),
    )?;

    Ok(ProductServiceClientConfig {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
    })
}
