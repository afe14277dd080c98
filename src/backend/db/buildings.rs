/**
 * Building and Apartment Queries
 */

use sqlx::PgPool;

use crate::backend::db::models::{Apartment, Building};

/// Get building by ID
pub async fn get_building(pool: &PgPool, id: i32) -> Result<Option<Building>, sqlx::Error> {
    sqlx::query_as::<_, Building>(
        r#"
        SELECT id, address, entrance, total_apartments, total_residents
        FROM buildings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All apartments of a building, by apartment number ascending
///
/// Ties on number (the schema does not forbid them) are broken by id so the
/// order stays deterministic.
pub async fn list_apartments(pool: &PgPool, building_id: i32) -> Result<Vec<Apartment>, sqlx::Error> {
    sqlx::query_as::<_, Apartment>(
        r#"
        SELECT id, building_id, number, floor, type, residents, user_id
        FROM apartments
        WHERE building_id = $1
        ORDER BY number, id
        "#,
    )
    .bind(building_id)
    .fetch_all(pool)
    .await
}
