/**
 * Contact Request Storage
 */

use sqlx::PgPool;

use crate::backend::db::models::NewContactRequest;

/// Insert a contact request and return its id
pub async fn insert_contact_request(pool: &PgPool, request: &NewContactRequest) -> Result<i32, sqlx::Error> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO contact_requests (name, phone, email, message, type)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(&request.name)
    .bind(&request.phone)
    .bind(&request.email)
    .bind(&request.message)
    .bind(request.kind.as_str())
    .fetch_one(pool)
    .await?;

    Ok(id)
}
