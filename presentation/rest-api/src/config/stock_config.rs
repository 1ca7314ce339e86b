use std::num::NonZeroU32;

use business::domain::stock::value_objects::{DEFAULT_MINIMUM_STOCK, StockThreshold};

use super::env::{ConfigError, parse_optional, parse_or, read_var};

/// Where stock data is read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StockSourceKind {
    ProductService,
    Database,
}

impl std::str::FromStr for StockSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "product_service" | "product-service" => Ok(StockSourceKind::ProductService),
            "database" => Ok(StockSourceKind::Database),
            _ => Err(format!("Invalid stock source: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StockConfig {
    pub source: StockSourceKind,
    pub minimum_stock: StockThreshold,
    pub max_pages: Option<u32>,
}

impl StockConfig {
    /// Environment variables:
    /// - STOCK_SOURCE: "product_service" (default) or "database"
    /// - STOCK_MINIMUM_LIMIT: Quantity under which stock is flagged (default: 10)
    /// - STOCK_TRAVERSAL_MAX_PAGES: Upper bound on pages fetched by GET /stock, at least 1 (default: unbounded)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            read_var("STOCK_SOURCE"),
            read_var("STOCK_MINIMUM_LIMIT"),
            read_var("STOCK_TRAVERSAL_MAX_PAGES"),
        )
    }

    fn from_values(
        source: Option<String>,
        minimum_stock: Option<String>,
        max_pages: Option<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            source: parse_or("STOCK_SOURCE", source, StockSourceKind::ProductService)?,
            minimum_stock: StockThreshold::new(parse_or(
                "STOCK_MINIMUM_LIMIT",
                minimum_stock,
                DEFAULT_MINIMUM_STOCK,
            )?),
            max_pages: parse_optional::<NonZeroU32>("STOCK_TRAVERSAL_MAX_PAGES", max_pages)?
                .map(NonZeroU32::get),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_product_service_with_limit_ten() {
        let config = StockConfig::from_values(None, None, None).unwrap();

        assert_eq!(config.source, StockSourceKind::ProductService);
        assert_eq!(config.minimum_stock.value(), 10);
        assert_eq!(config.max_pages, None);
    }

    #[test]
    fn should_read_database_source_and_bounds() {
        let config = StockConfig::from_values(
            Some("database".to_string()),
            Some("3".to_string()),
            Some("50".to_string()),
        )
        .unwrap();

        assert_eq!(config.source, StockSourceKind::Database);
        assert_eq!(config.minimum_stock.value(), 3);
        assert_eq!(config.max_pages, Some(50));
    }

    #[test]
    fn should_reject_unknown_source() {
        let result = StockConfig::from_values(Some("cache".to_string()), None, None);

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::Invalid {
                name: "STOCK_SOURCE",
                ..
            }
        ));
    }

    #[test]
    fn should_reject_zero_page_bound() {
        let result = StockConfig::from_values(None, None, Some("0".to_string()));

        assert_eq!(
            result.unwrap_err(),
            ConfigError::Invalid {
                name: "STOCK_TRAVERSAL_MAX_PAGES",
                value: "0".to_string(),
            }
        );
    }
}
