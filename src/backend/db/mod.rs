//! Database Module
//!
//! PostgreSQL access for the backend. Every query is a free async function
//! taking `&PgPool`, grouped by the table it mainly touches:
//!
//! - **`schema`** - table creation and sample data
//! - **`models`** - `FromRow` row structs
//! - **`users`** - accounts, residences and profile details
//! - **`buildings`** - buildings and their apartments
//! - **`events`** - building events
//! - **`financial`** - per-apartment financial report
//! - **`contacts`** - marketing form submissions

pub mod buildings;
pub mod contacts;
pub mod events;
pub mod financial;
pub mod models;
pub mod schema;
pub mod users;

use sqlx::PgPool;

pub use schema::{init_schema, seed_sample_data};

/// Round-trip a trivial query to check the database is reachable
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
