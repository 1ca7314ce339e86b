use super::env::{ConfigError, parse_or, read_var};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        let ip = read_var("SERVICE_IP").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or("SERVICE_PORT", read_var("SERVICE_PORT"), 8080)?;

        Ok(Self { ip, port })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
