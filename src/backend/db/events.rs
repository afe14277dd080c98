/**
 * Event Queries
 */

use sqlx::PgPool;

use crate::backend::db::models::Event;

/// Most recent events of a building, newest date first
pub async fn list_events(pool: &PgPool, building_id: i32, limit: i64) -> Result<Vec<Event>, sqlx::Error> {
    sqlx::query_as::<_, Event>(
        r#"
        SELECT id, building_id, date, title, description, created_at
        FROM events
        WHERE building_id = $1
        ORDER BY date DESC, id DESC
        LIMIT $2
        "#,
    )
    .bind(building_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Insert an event and return its id
///
/// `date` is handed to PostgreSQL as text and cast to `DATE` there, so the
/// column type is the only date validation.
pub async fn create_event(
    pool: &PgPool,
    building_id: i32,
    date: &str,
    title: &str,
    description: &str,
) -> Result<i32, sqlx::Error> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO events (building_id, date, title, description)
        VALUES ($1, $2::date, $3, $4)
        RETURNING id
        "#,
    )
    .bind(building_id)
    .bind(date)
    .bind(title)
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(id)
}
