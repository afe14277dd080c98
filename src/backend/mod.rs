//! Backend Module
//!
//! This module contains all server-side code for the DomUnity backend: the
//! gRPC services, the HTTP health shim, authentication and PostgreSQL
//! persistence.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Startup, application state, database setup
//! - **`routes`** - HTTP router (`/health`, the `/api` JSON facade, 404 fallback)
//! - **`middleware`** - Bearer token extractor for the JSON facade
//! - **`services`** - gRPC service implementations and row mapping
//! - **`auth`** - Password hashing, JWT tokens, `AuthService`
//! - **`db`** - Schema, row types and queries
//! - **`error`** - Backend error types and their transport conversions
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - domunity-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - HTTP routes
//! ├── middleware/     - Request extractors
//! ├── services/       - gRPC services
//! ├── auth/           - Authentication
//! ├── db/             - Persistence
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! client → tonic (gRPC or gRPC-Web) → service → `db` query → row → `services::mapping` → response
//!
//! client → axum `/api` route → the same service → JSON response
//!
//! Handlers share nothing but the connection pool; there is no in-process
//! mutable state.
//!
//! # Example
//!
//! ```rust,no_run
//! use domunity::backend::server;
//! use domunity::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! server::run(config).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Request extractors
pub mod middleware;

/// gRPC service implementations
pub mod services;

/// Authentication and token management
pub mod auth;

/// PostgreSQL persistence
pub mod db;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::{ActionOutcome, BackendError};
pub use server::{run, AppState};
