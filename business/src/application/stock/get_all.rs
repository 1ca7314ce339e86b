use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::stock::errors::StockError;
use crate::domain::stock::mapper::StockViewMapper;
use crate::domain::stock::model::StockView;
use crate::domain::stock::source::StockSource;
use crate::domain::stock::use_cases::get_all::{GetAllStocksParams, GetAllStocksUseCase};
use crate::domain::stock::value_objects::PageRequest;

/// Walks every page of the source and flattens the result.
///
/// Pages are fetched one at a time, in index order, until the source flags a
/// page as the last one. Any failure discards what was accumulated so far.
/// `max_pages` optionally bounds the number of requests; without it an
/// upstream that never reports a last page keeps the loop running.
pub struct GetAllStocksUseCaseImpl {
    pub source: Arc<dyn StockSource>,
    pub mapper: StockViewMapper,
    pub max_pages: Option<u32>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllStocksUseCase for GetAllStocksUseCaseImpl {
    async fn execute(&self, params: GetAllStocksParams) -> Result<Vec<StockView>, StockError> {
        let mut request = PageRequest::new(params.start_page, params.page_size);
        self.logger.info(&format!(
            "Fetching all stocks from page {} with page size {}",
            request.page(),
            request.size()
        ));

        let mut stocks = Vec::new();
        let mut fetched_pages: u32 = 0;

        loop {
            if let Some(max_pages) = self.max_pages
                && fetched_pages >= max_pages
            {
                self.logger.error(&format!(
                    "Traversal stopped after {} pages without reaching the last page",
                    fetched_pages
                ));
                return Err(StockError::TraversalLimitExceeded { max_pages });
            }

            let page = match self.source.fetch_page(request).await {
                Ok(Some(page)) => page,
                Ok(None) => {
                    self.logger.error(&format!(
                        "Source returned an empty body for page {}",
                        request.page()
                    ));
                    return Err(StockError::InvalidResponse);
                }
                Err(err) => {
                    self.logger.error(&format!(
                        "Failed to fetch page {}: {} ({}); discarding {} accumulated stocks",
                        request.page(),
                        err,
                        err.message(),
                        stocks.len()
                    ));
                    return Err(err.into());
                }
            };
            fetched_pages += 1;

            let is_last = page.is_last;
            if page.is_empty() {
                self.logger
                    .debug(&format!("Page {} has no content", request.page()));
            } else {
                self.logger.debug(&format!(
                    "Page {} returned {} products",
                    request.page(),
                    page.content.len()
                ));
                let now = Utc::now();
                stocks.extend(
                    page.content
                        .into_iter()
                        .map(|product| self.mapper.to_stock_view(product, now)),
                );
            }

            if is_last {
                break;
            }
            request = request.next();
        }

        self.logger.info(&format!(
            "Fetched {} stocks across {} pages",
            stocks.len(),
            fetched_pages
        ));
        Ok(stocks)
    }
}
