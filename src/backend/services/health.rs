/**
 * Health Service
 *
 * `healthy` is always `true`; only `database_status` reflects the probe.
 * The HTTP `/health` route is the one that turns a failed probe into a 503.
 */

use sqlx::PgPool;
use tonic::{Request, Response, Status};

use crate::backend::db;
use crate::shared::proto::health_service_server::HealthService;
use crate::shared::proto::{HealthCheckRequest, HealthCheckResponse};

/// Crate version reported by both health endpoints
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DATABASE_HEALTHY: &str = "healthy";
pub const DATABASE_UNHEALTHY: &str = "unhealthy";

/// `HealthService` implementation
#[derive(Debug, Clone)]
pub struct HealthServiceImpl {
    pool: PgPool,
}

impl HealthServiceImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[tonic::async_trait]
impl HealthService for HealthServiceImpl {
    async fn check(&self, _request: Request<HealthCheckRequest>) -> Result<Response<HealthCheckResponse>, Status> {
        let database_status = match db::ping(&self.pool).await {
            Ok(()) => DATABASE_HEALTHY,
            Err(e) => {
                tracing::warn!("Health check database probe failed: {}", e);
                DATABASE_UNHEALTHY
            }
        };

        Ok(Response::new(HealthCheckResponse {
            healthy: true,
            version: VERSION.to_string(),
            database_status: database_status.to_string(),
        }))
    }
}
