/**
 * HTTP Health Check
 *
 * `GET /health` for load balancers and uptime probes that cannot speak
 * gRPC. Unlike the gRPC `HealthService`, a failed database probe turns the
 * whole response unhealthy (HTTP 503).
 *
 * # Example Response
 *
 * ```json
 * {
 *   "status": "healthy",
 *   "database": "connected",
 *   "timestamp": "2025-11-05T10:00:00.000Z",
 *   "service": "domunity-backend",
 *   "version": "1.0.0"
 * }
 * ```
 */

use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::backend::db;
use crate::backend::services::health::VERSION;

/// Service name reported by `/health`
pub const SERVICE_NAME: &str = "domunity-backend";

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// `"healthy"` or `"unhealthy"`
    pub status: String,
    /// `"connected"` or `"error: <message>"`
    pub database: String,
    /// Time of the check, RFC 3339 UTC
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

/// Probe the database and report
pub async fn health_check(State(pool): State<PgPool>) -> (StatusCode, Json<HealthReport>) {
    let (status_code, status, database) = match db::ping(&pool).await {
        Ok(()) => (StatusCode::OK, "healthy", "connected".to_string()),
        Err(e) => {
            tracing::warn!("Health check database probe failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", format!("error: {}", e))
        }
    };

    let report = HealthReport {
        status: status.to_string(),
        database,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME.to_string(),
        version: VERSION.to_string(),
    };

    (status_code, Json(report))
}
