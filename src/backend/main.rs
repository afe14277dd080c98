/**
 * DomUnity Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the configuration and runs the
 * gRPC and HTTP servers until Ctrl-C.
 */

use domunity::backend::server;
use domunity::shared::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "domunity=debug,tower_http=info,info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!(
        "Starting DomUnity backend v{} (gRPC port {}, HTTP port {})",
        env!("CARGO_PKG_VERSION"),
        config.grpc_port,
        config.http_port
    );

    server::run(config).await?;
    Ok(())
}
