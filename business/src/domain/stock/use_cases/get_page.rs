use async_trait::async_trait;

use crate::domain::stock::errors::StockError;
use crate::domain::stock::model::StockView;
use crate::domain::stock::page::Page;

pub struct GetStockPageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

#[async_trait]
pub trait GetStockPageUseCase: Send + Sync {
    async fn execute(&self, params: GetStockPageParams) -> Result<Page<StockView>, StockError>;
}
