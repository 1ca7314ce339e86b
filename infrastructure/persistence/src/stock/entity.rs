use sqlx::FromRow;
use uuid::Uuid;

use business::domain::stock::model::UpstreamProduct;

/// Row of the `stock_view` table.
#[derive(Debug, FromRow)]
pub struct StockViewEntity {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity_available: Option<i32>,
}

impl StockViewEntity {
    /// Storage keeps no description or price; only stock columns are mapped.
    pub fn into_domain(self) -> UpstreamProduct {
        UpstreamProduct {
            id: self.product_id,
            name: self.product_name,
            description: None,
            price: None,
            quantity_in_stock: self.quantity_available,
        }
    }
}
