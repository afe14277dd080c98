/**
 * Database Setup
 *
 * Builds the PostgreSQL pool from `AppConfig`, creates the schema and seeds
 * sample rows.
 *
 * # Error Handling
 *
 * A pool that cannot connect or a schema that cannot be created stops the
 * server. Seeding failures are logged and ignored.
 */

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::backend::db::{init_schema, seed_sample_data};
use crate::shared::AppConfig;

/// How long a request waits for a pooled connection
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Connect to PostgreSQL and prepare the schema
///
/// # Arguments
///
/// * `config` - Application configuration holding the connection string
///
/// # Returns
///
/// A ready-to-use pool, shared by every service
pub async fn load_database(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database at {}", config.masked_database_url());

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {}", e);
            e
        })?;

    tracing::info!(
        "Database connection pool created (max {} connections)",
        config.max_connections
    );

    init_schema(&pool).await.map_err(|e| {
        tracing::error!("Failed to initialize database schema: {}", e);
        e
    })?;

    if seed_sample_data(&pool).await {
        tracing::info!("Empty database seeded with sample data");
    }

    Ok(pool)
}
