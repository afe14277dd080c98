//! Backend Error Module
//!
//! This module defines the failure shapes used by the RPC handlers and their
//! conversions into gRPC statuses and HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and ActionOutcome
//! └── conversion.rs - tonic::Status and axum IntoResponse conversions
//! ```
//!
//! # Choosing a shape
//!
//! Read operations with a natural "missing" case (`GetProfile`,
//! `GetBuilding`, report and list calls) return `Err(BackendError)`, which
//! becomes a status error. Write and auth operations return a normal
//! response built from an `ActionOutcome`, so expected failures arrive as
//! `{success: false, message}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ActionOutcome, BackendError};
