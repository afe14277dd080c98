/**
 * Router Configuration
 *
 * The HTTP side of the backend: the health probe, the JSON facade under
 * `/api` and a JSON 404 for everything else. CORS is as permissive as on
 * the gRPC port.
 */

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::api_routes;
use crate::backend::routes::health::health_check;
use crate::backend::server::init::cors_layer;
use crate::backend::server::state::AppState;

/// Create the Axum router
///
/// # Routes
///
/// - `GET /health` - database probe, 200 or 503
/// - `/api/...` - see `api_routes`
/// - anything else - `{"error": "Not found", "status": 404}`
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .fallback(|| async { BackendError::UnknownRoute })
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(app_state)
}
