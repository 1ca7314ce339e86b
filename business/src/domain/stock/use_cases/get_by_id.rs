use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::StockView;

pub struct GetStockByIdParams {
    pub product_id: Uuid,
}

#[async_trait]
pub trait GetStockByIdUseCase: Send + Sync {
    /// `Ok(None)` when the product is absent from the source.
    async fn execute(&self, params: GetStockByIdParams) -> Result<Option<StockView>, StockError>;
}
