use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;

use business::domain::errors::SourceError;
use business::domain::stock::model::UpstreamProduct;
use business::domain::stock::page::Page;
use business::domain::stock::source::StockSource;
use business::domain::stock::value_objects::PageRequest;

use crate::client::ProductServiceClient;
use crate::dto::{PageResponseDto, ProductDto};

/// `StockSource` backed by the upstream product service.
///
/// One HTTP round-trip per call, no retries.
pub struct ProductServiceStockSource {
    client: ProductServiceClient,
}

impl ProductServiceStockSource {
    pub fn new(client: ProductServiceClient) -> Self {
        Self { client }
    }

    /// Sends the request and returns the raw body of a successful response,
    /// `None` when that body is empty or a JSON `null`.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Option<String>, SourceError> {
        let response = request.send().await.map_err(|e| {
            warn!(target: "product_service", url, error = %e, "product-service unreachable");
            SourceError::unavailable(e.to_string())
        })?;

        let status = response.status();
        debug!(target: "product_service", url, status = status.as_u16(), "product-service responded");

        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::not_found());
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            } else {
                body
            };
            warn!(target: "product_service", url, status = status.as_u16(), message = %message, "product-service returned an error");
            return Err(SourceError::upstream(status.as_u16(), message));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::unavailable(e.to_string()))?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }
        Ok(Some(body))
    }

    fn parse<T: DeserializeOwned>(body: &str, url: &str) -> Result<T, SourceError> {
        serde_json::from_str(body).map_err(|e| {
            warn!(target: "product_service", url, error = %e, "unreadable product-service payload");
            SourceError::invalid_response()
        })
    }
}

#[async_trait]
impl StockSource for ProductServiceStockSource {
    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<UpstreamProduct>, SourceError> {
        let url = self.client.product_url(&id);
        let request = self.client.client.get(&url);

        match self.send(request, &url).await? {
            Some(body) => {
                let dto: ProductDto = Self::parse(&body, &url)?;
                Ok(Some(dto.into_domain()))
            }
            None => Ok(None),
        }
    }

    async fn fetch_page(
        &self,
        request: PageRequest,
    ) -> Result<Option<Page<UpstreamProduct>>, SourceError> {
        let url = self.client.products_url();
        let http_request = self
            .client
            .client
            .get(&url)
            .query(&[("page", request.page()), ("size", request.size())]);

        match self.send(http_request, &url).await? {
            Some(body) => {
                let dto: PageResponseDto<ProductDto> = Self::parse(&body, &url)?;
                if dto.last.is_none() {
                    warn!(target: "product_service", url, page = request.page(), "page without 'last' flag, treating it as the last page");
                }
                Ok(Some(dto.into_domain(request)))
            }
            None => Ok(None),
        }
    }
}
