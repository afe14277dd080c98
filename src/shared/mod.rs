//! Shared Module
//!
//! This module contains the types that cross the process boundary: the gRPC
//! messages generated from `proto/domunity.proto`, the runtime configuration,
//! and the errors raised while interpreting caller-supplied values.
//!
//! # Overview
//!
//! Nothing here touches the database or the network. The backend builds on
//! these types; tests and tools can use them without starting a server.

/// Generated gRPC messages, clients and server traits
pub mod proto;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Identifier parsing for wire-level string ids
pub mod ids;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use ids::parse_id;
