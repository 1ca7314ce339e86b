use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::env::{parse_or, read_var, require_var};

/// Initialize the stock database pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_RUN_MIGRATIONS: Create the stock_view table at startup (default: false)
///
/// # Errors
/// Returns error if DATABASE_URL is not set, a value is malformed or connection fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = require_var("DATABASE_URL")?;
    let max_connections = parse_or(
        "DATABASE_MAX_CONNECTIONS",
        read_var("DATABASE_MAX_CONNECTIONS"),
        5,
    )?;
    let migrate = parse_or(
        "DATABASE_RUN_MIGRATIONS",
        read_var("DATABASE_RUN_MIGRATIONS"),
        false,
    )?;

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;
    if migrate {
        run_migrations(&pool).await?;
    }
    Ok(pool)
}
