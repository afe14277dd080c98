/**
 * Application State
 *
 * Everything the services and routes need, built once at startup and
 * cloned into each of them. `PgPool` is a handle to a shared pool, so
 * clones are cheap and all share the same connections.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let axum handlers extract only the part
 * they need, including a ready-made service for the JSON routes:
 *
 * ```rust,ignore
 * async fn handler(State(pool): State<PgPool>) {}
 * ```
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::{AuthServiceImpl, SessionKeys};
use crate::backend::services::{ContactServiceImpl, UserServiceImpl};
use crate::shared::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Token signing keys derived from `config.jwt_secret`
    pub sessions: SessionKeys,
    /// Runtime configuration
    pub config: AppConfig,
}

impl AppState {
    /// Assemble state from a connected pool and the configuration
    pub fn new(db_pool: PgPool, config: AppConfig) -> Self {
        let sessions = SessionKeys::new(&config.jwt_secret);
        Self {
            db_pool,
            sessions,
            config,
        }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for AuthServiceImpl {
    fn from_ref(state: &AppState) -> Self {
        AuthServiceImpl::new(state.db_pool.clone(), state.sessions.clone())
    }
}

impl FromRef<AppState> for UserServiceImpl {
    fn from_ref(state: &AppState) -> Self {
        UserServiceImpl::new(state.db_pool.clone())
    }
}

impl FromRef<AppState> for ContactServiceImpl {
    fn from_ref(state: &AppState) -> Self {
        ContactServiceImpl::new(state.db_pool.clone())
    }
}
