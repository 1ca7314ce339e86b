use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::SourceError;

use super::model::UpstreamProduct;
use super::page::Page;
use super::value_objects::PageRequest;

/// Read-only provider of product stock data.
///
/// Implemented by the upstream HTTP adapter and by the storage adapter;
/// the composition root picks one.
#[async_trait]
pub trait StockSource: Send + Sync {
    /// `Err(NotFound)` when the product does not exist, `Ok(None)` when the
    /// source answered successfully without a body.
    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<UpstreamProduct>, SourceError>;

    /// `Ok(None)` when the source answered successfully without a body.
    async fn fetch_page(
        &self,
        request: PageRequest,
    ) -> Result<Option<Page<UpstreamProduct>>, SourceError>;
}
