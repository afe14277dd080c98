/**
 * Database Connection Check
 *
 * Connects with the configured `DATABASE_URL`, runs a trivial query and
 * reports the server version and which DomUnity tables exist. Exits with a
 * non-zero status when the database cannot be reached.
 */

use sqlx::postgres::PgPoolOptions;
use sqlx::Row;

use domunity::backend::db::schema::TABLES;
use domunity::shared::config::mask_database_url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL is not set");
        std::process::exit(1);
    };

    println!("DATABASE CONNECTION CHECK");
    println!("=========================");
    println!("DATABASE_URL: {}", mask_database_url(&database_url));

    let pool = match PgPoolOptions::new().max_connections(1).connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Connection failed: {}", e);
            std::process::exit(1);
        }
    };

    let (one,): (i32,) = sqlx::query_as("SELECT 1").fetch_one(&pool).await?;
    println!("Connected (SELECT 1 returned {})", one);

    let row = sqlx::query("SELECT current_database() AS db, current_user AS usr, version() AS version")
        .fetch_one(&pool)
        .await?;
    let database: String = row.get("db");
    let user: String = row.get("usr");
    let version: String = row.get("version");
    println!("Database: {}", database);
    println!("User: {}", user);
    println!("Server: {}", version);

    println!();
    println!("Tables:");
    for table in TABLES {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_schema = current_schema() AND table_name = $1)",
        )
        .bind(table)
        .fetch_one(&pool)
        .await?;

        let marker = if exists { "present" } else { "missing" };
        println!("  {:<18} {}", table, marker);
    }

    pool.close().await;
    Ok(())
}
