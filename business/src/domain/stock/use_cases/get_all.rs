use async_trait::async_trait;

use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::StockView;

pub struct GetAllStocksParams {
    pub start_page: Option<u32>,
    pub page_size: Option<u32>,
}

#[async_trait]
pub trait GetAllStocksUseCase: Send + Sync {
    async fn execute(&self, params: GetAllStocksParams) -> Result<Vec<StockView>, StockError>;
}
