use std::time::Duration;

use reqwest::Client;

/// Connection settings for the upstream product service.
#[derive(Debug, Clone)]
pub struct ProductServiceClientConfig {
    /// Base URL, e.g. "http://localhost:8081"
    pub base_url: String,
    /// Per-request timeout (default: 30s)
    pub timeout: Duration,
}

impl Default for ProductServiceClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Shared HTTP client for the product service.
pub struct ProductServiceClient {
    pub client: Client,
    pub base_url: String,
}

impl ProductServiceClient {
    /// Fails when the HTTP client cannot be built with the configured timeout.
    pub fn new(config: ProductServiceClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the single product endpoint URL.
    pub fn product_url(&self, id: &uuid::Uuid) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    /// Returns the paged products endpoint URL (query string not included).
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }
}
