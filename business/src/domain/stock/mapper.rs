use chrono::{DateTime, Utc};

use super::model::{StockView, UpstreamProduct};
use super::value_objects::StockThreshold;

/// Returns true when `quantity` is strictly lower than `threshold`.
pub fn is_below_minimum(quantity: i32, threshold: StockThreshold) -> bool {
    threshold.is_below(quantity)
}

/// Converts source products into stock views.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockViewMapper {
    threshold: StockThreshold,
}

impl StockViewMapper {
    pub fn new(threshold: StockThreshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> StockThreshold {
        self.threshold
    }

    /// Maps one product. A missing quantity stays missing and the
    /// below-minimum flag is left unknown instead of defaulting to zero.
    pub fn to_stock_view(&self, product: UpstreamProduct, now: DateTime<Utc>) -> StockView {
        let below_minimum = product
            .quantity_in_stock
            .map(|quantity| is_below_minimum(quantity, self.threshold));

        StockView {
            product_id: product.id,
            product_name: product.name,
            quantity_available: product.quantity_in_stock,
            last_updated: now,
            below_minimum,
        }
    }
}
