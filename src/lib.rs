//! DomUnity - Main Library
//!
//! DomUnity is the backend of a property-management application: residents
//! and building administrators reach it through a gRPC API (also served as
//! gRPC-Web for browsers) backed by PostgreSQL.
//!
//! # Overview
//!
//! This library provides:
//! - Authentication (registration, login, access/refresh tokens)
//! - Resident profiles with their apartment and building
//! - Building, apartment and event management
//! - Per-building financial reports
//! - Contact, offer and presentation requests from the marketing site
//! - Health reporting over gRPC and plain HTTP
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types generated from `proto/domunity.proto`,
//!   configuration and input-parsing errors
//!
//! - **`backend`** - Server-side code
//!   - tonic service implementations, one per RPC service
//!   - Credential handling (bcrypt, JWT)
//!   - PostgreSQL schema and row mapping (sqlx)
//!   - The axum `/health` shim and `/api` JSON routes
//!
//! # Usage
//!
//! ```rust,no_run
//! use domunity::backend::server::init::run;
//! use domunity::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! run(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Read-style RPCs fail with a `tonic::Status` (not found, invalid argument,
//! internal). Write and auth RPCs always answer with a `{success, message}`
//! payload. See `backend::error` for both shapes.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
