/**
 * Server Initialization
 *
 * Starts the two listeners that make up the backend:
 *
 * - the gRPC server (all DomUnity services, gRPC-Web enabled, permissive
 *   CORS, plus the standard `grpc.health.v1.Health` service)
 * - the plain HTTP server carrying `/health` and the `/api` JSON routes
 *
 * Both run until Ctrl-C, then shut down gracefully together. If either one
 * fails, the other is stopped as well.
 */

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tonic::transport::server::Router as GrpcRouter;
use tonic::transport::Server;
use tower::layer::util::{Identity, Stack};
use tower_http::cors::{Any, CorsLayer};

use crate::backend::auth::AuthServiceImpl;
use crate::backend::routes::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::backend::services::{
    BuildingServiceImpl, ContactServiceImpl, EventServiceImpl, FinancialServiceImpl, HealthServiceImpl,
    UserServiceImpl,
};
use crate::shared::proto::auth_service_server::AuthServiceServer;
use crate::shared::proto::building_service_server::BuildingServiceServer;
use crate::shared::proto::contact_service_server::ContactServiceServer;
use crate::shared::proto::event_service_server::EventServiceServer;
use crate::shared::proto::financial_service_server::FinancialServiceServer;
use crate::shared::proto::health_service_server::HealthServiceServer;
use crate::shared::proto::user_service_server::UserServiceServer;
use crate::shared::AppConfig;

/// gRPC router with the CORS layer applied
pub type GrpcServer = GrpcRouter<Stack<CorsLayer, Identity>>;

/// Fatal server errors
#[derive(Debug, Error)]
pub enum ServerError {
    /// Pool creation or schema initialization failed
    #[error("Database setup failed: {0}")]
    Database(#[from] sqlx::Error),

    /// The gRPC transport failed
    #[error("gRPC server error: {0}")]
    Grpc(#[from] tonic::transport::Error),

    /// Binding or serving the HTTP listener failed
    #[error("HTTP server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Permissive CORS for browser gRPC-Web clients
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any)
        .expose_headers(Any)
}

/// Build the gRPC server with every service registered
///
/// Each DomUnity service gets its own clone of the pool; `AuthService` also
/// gets the signing keys. HTTP/1 is accepted so gRPC-Web requests reach the
/// services without a proxy.
pub async fn grpc_router(state: &AppState) -> GrpcServer {
    let pool = &state.db_pool;

    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<AuthServiceServer<AuthServiceImpl>>()
        .await;
    health_reporter
        .set_serving::<UserServiceServer<UserServiceImpl>>()
        .await;
    health_reporter
        .set_serving::<BuildingServiceServer<BuildingServiceImpl>>()
        .await;
    health_reporter
        .set_serving::<FinancialServiceServer<FinancialServiceImpl>>()
        .await;
    health_reporter
        .set_serving::<EventServiceServer<EventServiceImpl>>()
        .await;
    health_reporter
        .set_serving::<ContactServiceServer<ContactServiceImpl>>()
        .await;
    health_reporter
        .set_serving::<HealthServiceServer<HealthServiceImpl>>()
        .await;

    Server::builder()
        .accept_http1(true)
        .layer(cors_layer())
        .add_service(health_service)
        .add_service(tonic_web::enable(AuthServiceServer::new(AuthServiceImpl::new(
            pool.clone(),
            state.sessions.clone(),
        ))))
        .add_service(tonic_web::enable(UserServiceServer::new(UserServiceImpl::new(pool.clone()))))
        .add_service(tonic_web::enable(BuildingServiceServer::new(BuildingServiceImpl::new(
            pool.clone(),
        ))))
        .add_service(tonic_web::enable(FinancialServiceServer::new(FinancialServiceImpl::new(
            pool.clone(),
        ))))
        .add_service(tonic_web::enable(EventServiceServer::new(EventServiceImpl::new(pool.clone()))))
        .add_service(tonic_web::enable(ContactServiceServer::new(ContactServiceImpl::new(
            pool.clone(),
        ))))
        .add_service(tonic_web::enable(HealthServiceServer::new(HealthServiceImpl::new(pool.clone()))))
}

/// Connect to the database and run both servers until Ctrl-C
///
/// # Initialization Steps
///
/// 1. **Database**: create the pool, the schema and the sample rows
/// 2. **State**: derive signing keys and share the pool
/// 3. **Servers**: start the gRPC and HTTP listeners
/// 4. **Shutdown**: Ctrl-C stops both listeners gracefully
pub async fn run(config: AppConfig) -> Result<(), ServerError> {
    tracing::info!("Initializing DomUnity backend server");

    if config.jwt_secret_is_default {
        tracing::warn!("JWT_SECRET not set, using the development secret");
    }

    let pool = load_database(&config).await?;
    let state = AppState::new(pool, config);

    let grpc_addr = SocketAddr::from(([0, 0, 0, 0], state.config.grpc_port));
    let http_addr = SocketAddr::from(([0, 0, 0, 0], state.config.http_port));

    let grpc = grpc_router(&state).await;
    let http = create_router(state.clone());
    let listener = TcpListener::bind(http_addr).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(());
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(());
    });

    tracing::info!("gRPC server listening on {} (gRPC-Web and CORS enabled)", grpc_addr);
    tracing::info!("HTTP server listening on http://{} (/health, /api)", http_addr);

    let grpc_shutdown = wait_for_shutdown(shutdown_rx.clone());
    let http_shutdown = wait_for_shutdown(shutdown_rx);

    tokio::try_join!(
        async {
            grpc.serve_with_shutdown(grpc_addr, grpc_shutdown)
                .await
                .map_err(ServerError::from)
        },
        async {
            axum::serve(listener, http)
                .with_graceful_shutdown(http_shutdown)
                .await
                .map_err(ServerError::from)
        },
    )?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

async fn wait_for_shutdown(mut shutdown: watch::Receiver<()>) {
    let _ = shutdown.changed().await;
}
