use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use business::domain::errors::SourceError;
use business::domain::stock::model::UpstreamProduct;
use business::domain::stock::page::Page;
use business::domain::stock::source::StockSource;
use business::domain::stock::value_objects::PageRequest;

use super::entity::StockViewEntity;

/// `StockSource` reading the local `stock_view` table.
pub struct StockViewSourcePostgres {
    pool: PgPool,
}

impl StockViewSourcePostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_unavailable(error: sqlx::Error) -> SourceError {
    warn!(target: "persistence", error = %error, "stock_view query failed");
    SourceError::unavailable(error.to_string())
}

#[async_trait]
impl StockSource for StockViewSourcePostgres {
    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<UpstreamProduct>, SourceError> {
        let entity = sqlx::query_as::<_, StockViewEntity>(
            "SELECT product_id, product_name, quantity_available FROM stock_view WHERE product_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_unavailable)?
        .ok_or(SourceError::NotFound)?;

        Ok(Some(entity.into_domain()))
    }

    async fn fetch_page(
        &self,
        request: PageRequest,
    ) -> Result<Option<Page<UpstreamProduct>>, SourceError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stock_view")
            .fetch_one(&self.pool)
            .await
            .map_err(database_unavailable)?;

        let entities = sqlx::query_as::<_, StockViewEntity>(
            "SELECT product_id, product_name, quantity_available FROM stock_view ORDER BY product_name, product_id LIMIT $1 OFFSET $2",
        )
        .bind(i64::from(request.size()))
        .bind(i64::try_from(request.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(database_unavailable)?;

        let content = entities.into_iter().map(|e| e.into_domain()).collect();
        Ok(Some(Page::from_totals(
            content,
            request.page(),
            request.size(),
            u64::try_from(total).unwrap_or(0),
        )))
    }
}
