/**
 * Schema Initialization
 *
 * Creates the DomUnity tables on startup and seeds example rows into an
 * empty database.
 *
 * # Idempotency
 *
 * Every statement is `CREATE TABLE IF NOT EXISTS`, run inside a single
 * transaction: either all tables exist afterwards or none of the new ones
 * do. Running it against an initialized database is a no-op.
 *
 * # Seeding
 *
 * When `buildings` is empty, one building with three apartments and two
 * events is inserted. Seeding problems are logged and never stop startup.
 */

use sqlx::PgPool;

/// Tables in creation order (parents before children)
pub const TABLES: [&str; 7] = [
    "users",
    "buildings",
    "apartments",
    "events",
    "financial_records",
    "contact_requests",
    "user_profiles",
];

const CREATE_STATEMENTS: [&str; 7] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        email VARCHAR(255) UNIQUE NOT NULL,
        password_hash VARCHAR(255) NOT NULL,
        full_name VARCHAR(255),
        phone VARCHAR(50),
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS buildings (
        id SERIAL PRIMARY KEY,
        address VARCHAR(500) NOT NULL,
        entrance VARCHAR(10),
        total_apartments INTEGER DEFAULT 0,
        total_residents INTEGER DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS apartments (
        id SERIAL PRIMARY KEY,
        building_id INTEGER REFERENCES buildings(id),
        number INTEGER NOT NULL,
        floor INTEGER,
        type VARCHAR(50),
        residents INTEGER DEFAULT 0,
        user_id INTEGER REFERENCES users(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS events (
        id SERIAL PRIMARY KEY,
        building_id INTEGER REFERENCES buildings(id),
        date DATE NOT NULL,
        title VARCHAR(500),
        description TEXT,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS financial_records (
        id SERIAL PRIMARY KEY,
        apartment_id INTEGER REFERENCES apartments(id),
        period VARCHAR(20),
        elevator_gtp DECIMAL(10, 2) DEFAULT 0,
        elevator_electricity DECIMAL(10, 2) DEFAULT 0,
        common_area_electricity DECIMAL(10, 2) DEFAULT 0,
        elevator_maintenance DECIMAL(10, 2) DEFAULT 0,
        management_fee DECIMAL(10, 2) DEFAULT 0,
        repair_fund DECIMAL(10, 2) DEFAULT 0,
        total_due DECIMAL(10, 2) DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS contact_requests (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255),
        phone VARCHAR(50),
        email VARCHAR(255),
        message TEXT,
        type VARCHAR(50),
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_profiles (
        id SERIAL PRIMARY KEY,
        user_id INTEGER UNIQUE REFERENCES users(id),
        account_manager VARCHAR(255),
        balance DECIMAL(10, 2) DEFAULT 0,
        client_number VARCHAR(50),
        contract_end_date DATE
    )
    "#,
];

/// Address of the seeded example building
pub const SAMPLE_ADDRESS: &str = "ж.к. Младост 3, бл. 325";

/// Apartment type used for seeded apartments and as the report default
pub const DEFAULT_APARTMENT_TYPE: &str = "Апартамент";

/// Create all tables if they do not exist
///
/// # Errors
///
/// Any failing statement rolls back the whole transaction and is returned.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Initializing database schema...");

    let mut tx = pool.begin().await?;
    for (table, statement) in TABLES.iter().zip(CREATE_STATEMENTS.iter()) {
        tracing::debug!("Creating {} table...", table);
        sqlx::query(*statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!("Database schema initialized");
    Ok(())
}

/// Seed example rows when the database has no buildings
///
/// Returns `true` if rows were inserted. Failures are logged, not returned.
pub async fn seed_sample_data(pool: &PgPool) -> bool {
    match try_seed(pool).await {
        Ok(seeded) => seeded,
        Err(e) => {
            tracing::warn!("Sample data insertion skipped: {}", e);
            false
        }
    }
}

async fn try_seed(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM buildings")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(false);
    }

    tracing::info!("Inserting sample data...");

    let mut tx = pool.begin().await?;

    let (building_id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO buildings (address, entrance, total_apartments, total_residents)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(SAMPLE_ADDRESS)
    .bind("Б")
    .bind(24)
    .bind(38)
    .fetch_one(&mut *tx)
    .await?;

    for i in 1..=3 {
        sqlx::query(
            r#"
            INSERT INTO apartments (building_id, number, floor, type, residents)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(building_id)
        .bind(i)
        .bind(i)
        .bind(DEFAULT_APARTMENT_TYPE)
        .bind(2 + i)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query(
        r#"
        INSERT INTO events (building_id, date, title, description)
        VALUES
            ($1, DATE '2025-11-05', 'Планирана профилактика', 'Планирана профилактика на асансьора от 10:00 до 13:00 ч.'),
            ($1, DATE '2025-11-02', 'Общо събрание', 'Общо събрание на вход Б – от 19:00 ч. във входното фоайе.')
        "#,
    )
    .bind(building_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!("Sample data inserted (building {})", building_id);
    Ok(true)
}
