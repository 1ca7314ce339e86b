use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Product record as reported by a stock source.
///
/// `quantity_in_stock` is optional: the upstream catalog may omit the field
/// or ship it under a different name.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamProduct {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub quantity_in_stock: Option<i32>,
}

/// Read-model projection of a product's availability.
///
/// Built fresh for every source response and never persisted.
/// `below_minimum` is `None` when the quantity is unknown.
#[derive(Debug, Clone, PartialEq)]
pub struct StockView {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity_available: Option<i32>,
    pub last_updated: DateTime<Utc>,
    pub below_minimum: Option<bool>,
}
