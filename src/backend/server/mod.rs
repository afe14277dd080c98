//! Server Module
//!
//! Startup and wiring for the backend.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - PostgreSQL pool creation and schema setup
//! - **`init`** - gRPC/HTTP server assembly and the `run` entry point
//!
//! # Initialization Flow
//!
//! 1. **Database**: connect, create tables, seed an empty database
//! 2. **State**: share the pool and the token keys
//! 3. **gRPC**: register the seven DomUnity services and the standard health service
//! 4. **HTTP**: serve `/health`
//! 5. **Shutdown**: Ctrl-C stops both servers

/// Application state management
pub mod state;

/// Database setup
pub mod config;

/// Server initialization
pub mod init;

pub use init::{grpc_router, run, ServerError};
pub use state::AppState;
