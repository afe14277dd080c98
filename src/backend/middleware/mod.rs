//! Middleware Module
//!
//! Request extractors shared by the JSON routes.
//!
//! - **`auth`** - `Authorization: Bearer` verification

/// Bearer token authentication
pub mod auth;

pub use auth::AuthUser;
