//! Authentication Module
//!
//! This module handles user registration, login and token refresh for the
//! `AuthService` RPCs.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT access and refresh tokens
//! - **`service`** - `AuthService` gRPC handlers
//!
//! # Authentication Flow
//!
//! 1. **Register**: email, password, name and phone → password hashed → user row inserted
//! 2. **Login**: email and password → credentials verified → access and refresh tokens returned
//! 3. **RefreshToken**: refresh token verified → new access token returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless; there is no revocation list
//! - Unknown email and wrong password produce the same failure message

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// gRPC handlers
pub mod service;

pub use service::AuthServiceImpl;
pub use sessions::{Claims, SessionKeys};
