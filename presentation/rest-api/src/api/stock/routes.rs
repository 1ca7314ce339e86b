use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::stock::use_cases::get_all::{GetAllStocksParams, GetAllStocksUseCase};
use business::domain::stock::use_cases::get_by_id::{GetStockByIdParams, GetStockByIdUseCase};
use business::domain::stock::use_cases::get_page::{GetStockPageParams, GetStockPageUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::stock::dto::{StockPageResponse, StockViewResponse};
use crate::api::tags::ApiTags;

pub struct StockApi {
    get_by_id_use_case: Arc<dyn GetStockByIdUseCase>,
    get_page_use_case: Arc<dyn GetStockPageUseCase>,
    get_all_use_case: Arc<dyn GetAllStocksUseCase>,
}

impl StockApi {
    pub fn new(
        get_by_id_use_case: Arc<dyn GetStockByIdUseCase>,
        get_page_use_case: Arc<dyn GetStockPageUseCase>,
        get_all_use_case: Arc<dyn GetAllStocksUseCase>,
    ) -> Self {
        Self {
            get_by_id_use_case,
            get_page_use_case,
            get_all_use_case,
        }
    }

    async fn find_stock(&self, id: &str) -> GetStockByIdResponse {
        let product_id = match Uuid::parse_str(id) {
            Ok(uuid) => uuid,
            Err(_) => {
                return GetStockByIdResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    "stock.invalid_id",
                )));
            }
        };

        match self
            .get_by_id_use_case
            .execute(GetStockByIdParams { product_id })
            .await
        {
            Ok(Some(view)) => GetStockByIdResponse::Ok(Json(view.into())),
            Ok(None) => GetStockByIdResponse::NotFound(Json(ErrorResponse::new(
                "NotFound",
                "stock.not_found",
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetStockByIdResponse::NotFound(json),
                    _ => GetStockByIdResponse::ServiceUnavailable(json),
                }
            }
        }
    }
}

/// Negative values are treated as zero.
fn non_negative(value: Option<i32>) -> Option<u32> {
    value.map(|v| u32::try_from(v).unwrap_or(0))
}

/// Stock availability API
///
/// Read-only views of product stock, flagged against the minimum stock limit.
#[OpenApi]
impl StockApi {
    /// Get stock by product ID
    ///
    /// Returns the stock view of a single product.
    #[oai(path = "/stocks/:id", method = "get", tag = "ApiTags::Stocks")]
    async fn get_stock_by_id(&self, id: Path<String>) -> GetStockByIdResponse {
        self.find_stock(&id.0).await
    }

    /// Get stock by product ID (legacy path)
    #[oai(path = "/stock/:id", method = "get", tag = "ApiTags::Stocks")]
    async fn get_stock_by_id_legacy(&self, id: Path<String>) -> GetStockByIdResponse {
        self.find_stock(&id.0).await
    }

    /// Get one page of stocks
    ///
    /// Page defaults to 0 and size to 20; size is clamped to [1, 100].
    #[oai(path = "/stocks", method = "get", tag = "ApiTags::Stocks")]
    async fn get_stock_page(
        &self,
        page: Query<Option<i32>>,
        size: Query<Option<i32>>,
    ) -> GetStockPageResponse {
        let params = GetStockPageParams {
            page: non_negative(page.0),
            size: non_negative(size.0),
        };

        match self.get_page_use_case.execute(params).await {
            Ok(page) => GetStockPageResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetStockPageResponse::NotFound(json),
                    _ => GetStockPageResponse::ServiceUnavailable(json),
                }
            }
        }
    }

    /// List all stocks
    ///
    /// Walks every upstream page from the first one and returns the
    /// concatenated result. The `page` parameter is accepted for
    /// compatibility and ignored.
    #[oai(path = "/stock", method = "get", tag = "ApiTags::Stocks")]
    async fn get_all_stocks(
        &self,
        #[oai(name = "page")] _page: Query<Option<i32>>,
        size: Query<Option<i32>>,
    ) -> GetAllStocksResponse {
        let params = GetAllStocksParams {
            start_page: None,
            page_size: non_negative(size.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(stocks) => {
                let responses: Vec<StockViewResponse> =
                    stocks.into_iter().map(|s| s.into()).collect();
                GetAllStocksResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetAllStocksResponse::NotFound(json),
                    _ => GetAllStocksResponse::ServiceUnavailable(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStockByIdResponse {
    #[oai(status = 200)]
    Ok(Json<StockViewResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStockPageResponse {
    #[oai(status = 200)]
    Ok(Json<StockPageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllStocksResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<StockViewResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
