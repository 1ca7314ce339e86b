use std::sync::Arc;

use logger::TracingLogger;
use persistence::stock::source::StockViewSourcePostgres;
use product_service::client::ProductServiceClient;
use product_service::stock_source::ProductServiceStockSource;
use tracing::info;

use business::application::stock::get_all::GetAllStocksUseCaseImpl;
use business::application::stock::get_by_id::GetStockByIdUseCaseImpl;
use business::application::stock::get_page::GetStockPageUseCaseImpl;
use business::domain::stock::mapper::StockViewMapper;
use business::domain::stock::source::StockSource;

use crate::api::health::routes::Api as HealthApi;
use crate::api::stock::routes::StockApi;
use crate::config::app_config::AppConfig;
use crate::config::database_config;
use crate::config::stock_config::StockSourceKind;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub stock_api: StockApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let source: Arc<dyn StockSource> = match config.stock.source {
            StockSourceKind::ProductService => {
                info!(base_url = %config.product_service.base_url, "Reading stock from product-service");
                let client = ProductServiceClient::new(config.product_service.clone())?;
                Arc::new(ProductServiceStockSource::new(client))
            }
            StockSourceKind::Database => {
                info!("Reading stock from the stock_view table");
                let pool = database_config::init_database().await?;
                Arc::new(StockViewSourcePostgres::new(pool))
            }
        };
        let mapper = StockViewMapper::new(config.stock.minimum_stock);

        // Stock use cases
        let get_by_id_use_case = Arc::new(GetStockByIdUseCaseImpl {
            source: source.clone(),
            mapper,
            logger: logger.clone(),
        });
        let get_page_use_case = Arc::new(GetStockPageUseCaseImpl {
            source: source.clone(),
            mapper,
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllStocksUseCaseImpl {
            source,
            mapper,
            max_pages: config.stock.max_pages,
            logger,
        });

        let stock_api = StockApi::new(get_by_id_use_case, get_page_use_case, get_all_use_case);

        Ok(Self {
            health_api,
            stock_api,
        })
    }
}
