use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::SourceError;
use crate::domain::logger::Logger;
use crate::domain::stock::errors::StockError;
use crate::domain::stock::mapper::StockViewMapper;
use crate::domain::stock::model::StockView;
use crate::domain::stock::source::StockSource;
use crate::domain::stock::use_cases::get_by_id::{GetStockByIdParams, GetStockByIdUseCase};

pub struct GetStockByIdUseCaseImpl {
    pub source: Arc<dyn StockSource>,
    pub mapper: StockViewMapper,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStockByIdUseCase for GetStockByIdUseCaseImpl {
    async fn execute(&self, params: GetStockByIdParams) -> Result<Option<StockView>, StockError> {
        self.logger
            .info(&format!("Fetching stock for product: {}", params.product_id));

        let product = match self.source.fetch_by_id(params.product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                self.logger.warn(&format!(
                    "Source returned an empty body for product: {}",
                    params.product_id
                ));
                return Ok(None);
            }
            Err(SourceError::NotFound) => {
                self.logger
                    .warn(&format!("Product not found: {}", params.product_id));
                return Ok(None);
            }
            Err(other) => {
                self.logger.error(&format!(
                    "Failed to fetch product {}: {} ({})",
                    params.product_id,
                    other,
                    other.message()
                ));
                return Err(other.into());
            }
        };

        let view = self.mapper.to_stock_view(product, Utc::now());
        self.logger.debug(&format!(
            "Stock for {}: quantity={:?}, below_minimum={:?}",
            view.product_id, view.quantity_available, view.below_minimum
        ));
        Ok(Some(view))
    }
}
