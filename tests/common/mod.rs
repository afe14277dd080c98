//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database fixtures (connection, schema, seeded rows)
//! - Authentication helpers (config, keys, registered users)
//! - Custom assertion macros


// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
