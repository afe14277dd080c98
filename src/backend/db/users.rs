/**
 * User Queries
 *
 * Account rows (`users`), the resident's apartment and building, and the
 * account details held in `user_profiles`.
 */

use sqlx::PgPool;

use crate::backend::db::models::{ProfileDetails, Residence, User};

/// Insert a new user and return its id
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email (unique)
/// * `password_hash` - bcrypt hash of the password
/// * `full_name` - Display name
/// * `phone` - Phone number, stored as given
///
/// # Errors
/// A duplicate email surfaces as a unique-violation database error.
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
    full_name: &str,
    phone: &str,
) -> Result<i32, sqlx::Error> {
    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO users (email, password_hash, full_name, phone)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(full_name)
    .bind(phone)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, full_name, phone, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, full_name, phone, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Overwrite a user's name and phone
///
/// # Returns
/// Number of rows updated (0 when the user does not exist)
pub async fn update_contact_details(
    pool: &PgPool,
    id: i32,
    full_name: &str,
    phone: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET full_name = $1, phone = $2 WHERE id = $3")
        .bind(full_name)
        .bind(phone)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// The apartment (and its building) owned by a user
///
/// A user is assumed to own at most one apartment; if there are several, the
/// one with the lowest id is returned.
pub async fn find_residence(pool: &PgPool, user_id: i32) -> Result<Option<Residence>, sqlx::Error> {
    sqlx::query_as::<_, Residence>(
        r#"
        SELECT a.id AS apartment_id, b.id AS building_id, a.number, a.floor,
               a.type AS apartment_type, a.residents,
               b.address, b.entrance, b.total_apartments, b.total_residents
        FROM apartments a
        JOIN buildings b ON a.building_id = b.id
        WHERE a.user_id = $1
        ORDER BY a.id
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Account manager, balance, client number and contract end date
pub async fn get_profile_details(
    pool: &PgPool,
    user_id: i32,
) -> Result<Option<ProfileDetails>, sqlx::Error> {
    sqlx::query_as::<_, ProfileDetails>(
        r#"
        SELECT account_manager, balance::float8 AS balance, client_number, contract_end_date
        FROM user_profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
