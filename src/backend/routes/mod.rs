//! Route Configuration Module
//!
//! HTTP routes served next to the gRPC server.
//!
//! - **`router`** - router assembly, fallback and tracing layer
//! - **`health`** - `GET /health`
//! - **`api_routes`** - JSON facade over the auth, profile and contact services

/// Main router creation
pub mod router;

/// Health check handler
pub mod health;

/// JSON API handlers
pub mod api_routes;

pub use router::create_router;
