use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::stock::errors::StockError;
use crate::domain::stock::mapper::StockViewMapper;
use crate::domain::stock::model::StockView;
use crate::domain::stock::page::Page;
use crate::domain::stock::source::StockSource;
use crate::domain::stock::use_cases::get_page::{GetStockPageParams, GetStockPageUseCase};
use crate::domain::stock::value_objects::PageRequest;

pub struct GetStockPageUseCaseImpl {
    pub source: Arc<dyn StockSource>,
    pub mapper: StockViewMapper,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStockPageUseCase for GetStockPageUseCaseImpl {
    async fn execute(&self, params: GetStockPageParams) -> Result<Page<StockView>, StockError> {
        let request = PageRequest::new(params.page, params.size);
        if params.size.is_some_and(|size| size != request.size()) {
            self.logger.warn(&format!(
                "Requested page size {:?} out of range, using {}",
                params.size,
                request.size()
            ));
        }
        self.logger.info(&format!(
            "Fetching stock page {} (size {})",
            request.page(),
            request.size()
        ));

        let page = self
            .source
            .fetch_page(request)
            .await?
            .ok_or(StockError::InvalidResponse)?;

        let now = Utc::now();
        let page = page.map(|product| self.mapper.to_stock_view(product, now));
        self.logger.info(&format!(
            "Returned {} stocks of {:?} (page {} of {:?})",
            page.content.len(),
            page.total_elements,
            page.page + 1,
            page.total_pages
        ));
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SourceError;
    use crate::domain::stock::model::UpstreamProduct;
    use crate::domain::stock::value_objects::StockThreshold;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub Source {}

        #[async_trait]
        impl StockSource for Source {
            async fn fetch_by_id(&self, id: Uuid) -> Result<Option<UpstreamProduct>, SourceError>;
            async fn fetch_page(
                &self,
                request: PageRequest,
            ) -> Result<Option<Page<UpstreamProduct>>, SourceError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(name: &str, quantity: Option<i32>) -> UpstreamProduct {
        UpstreamProduct {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            price: None,
            quantity_in_stock: quantity,
        }
    }

    fn use_case(source: MockSource) -> GetStockPageUseCaseImpl {
        GetStockPageUseCaseImpl {
            source: Arc::new(source),
            mapper: StockViewMapper::new(StockThreshold::new(10)),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_repackage_page_keeping_upstream_metadata() {
        let mut source = MockSource::new();
        source
            .expect_fetch_page()
            .withf(|request| request.page() == 2 && request.size() == 2)
            .times(1)
            .returning(|request| {
                Ok(Some(Page {
                    content: vec![product("Monitor", Some(15)), product("Cabo", Some(2))],
                    page: request.page(),
                    size: request.size(),
                    total_elements: Some(9),
                    total_pages: Some(5),
                    is_first: false,
                    is_last: false,
                }))
            });

        let page = use_case(source)
            .execute(GetStockPageParams {
                page: Some(2),
                size: Some(2),
            })
            .await
            .unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.size, 2);
        assert_eq!(page.total_elements, Some(9));
        assert_eq!(page.total_pages, Some(5));
        assert!(!page.is_first);
        assert!(!page.is_last);
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].product_name, "Monitor");
        assert_eq!(page.content[0].below_minimum, Some(false));
        assert_eq!(page.content[1].product_name, "Cabo");
        assert_eq!(page.content[1].below_minimum, Some(true));
    }

    #[tokio::test]
    async fn should_use_defaults_when_parameters_are_missing() {
        let mut source = MockSource::new();
        source
            .expect_fetch_page()
            .withf(|request| request.page() == 0 && request.size() == 20)
            .times(1)
            .returning(|_| Ok(Some(Page::from_totals(vec![], 0, 20, 0))));

        let result = use_case(source)
            .execute(GetStockPageParams {
                page: None,
                size: None,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_clamp_oversized_page_to_100() {
        let mut source = MockSource::new();
        source
            .expect_fetch_page()
            .withf(|request| request.size() == 100)
            .times(1)
            .returning(|_| Ok(Some(Page::from_totals(vec![], 0, 100, 0))));

        let result = use_case(source)
            .execute(GetStockPageParams {
                page: Some(0),
                size: Some(150),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_with_invalid_response_when_body_is_empty() {
        let mut source = MockSource::new();
        source.expect_fetch_page().returning(|_| Ok(None));

        let result = use_case(source)
            .execute(GetStockPageParams {
                page: None,
                size: None,
            })
            .await;

        assert_eq!(result.unwrap_err(), StockError::InvalidResponse);
    }

    #[tokio::test]
    async fn should_propagate_source_failure() {
        let mut source = MockSource::new();
        source
            .expect_fetch_page()
            .returning(|_| Err(SourceError::upstream(503, "maintenance")));

        let result = use_case(source)
            .execute(GetStockPageParams {
                page: None,
                size: None,
            })
            .await;

        assert_eq!(result.unwrap_err().status_code(), Some(503));
    }
}
