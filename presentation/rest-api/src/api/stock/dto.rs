use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::stock::model::StockView;
use business::domain::stock::page::Page;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct StockViewResponse {
    /// Product unique identifier
    pub product_id: String,
    /// Product name
    pub product_name: String,
    /// Units available, null when the source does not report it
    pub quantity_available: Option<i32>,
    /// Time this view was built
    pub last_updated: DateTime<Utc>,
    /// Whether the quantity is under the minimum stock limit, null when the quantity is unknown
    pub stock_below_minimum: Option<bool>,
}

impl From<StockView> for StockViewResponse {
    fn from(view: StockView) -> Self {
        Self {
            product_id: view.product_id.to_string(),
            product_name: view.product_name,
            quantity_available: view.quantity_available,
            last_updated: view.last_updated,
            stock_below_minimum: view.below_minimum,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct StockPageResponse {
    pub content: Vec<StockViewResponse>,
    /// Zero-based page index
    pub page: u32,
    pub size: u32,
    pub total_elements: Option<u64>,
    pub total_pages: Option<u32>,
    pub first: bool,
    pub last: bool,
}

impl From<Page<StockView>> for StockPageResponse {
    fn from(page: Page<StockView>) -> Self {
        Self {
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            first: page.is_first,
            last: page.is_last,
            content: page.content.into_iter().map(Into::into).collect(),
        }
    }
}
