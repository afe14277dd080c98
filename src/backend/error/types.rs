/**
 * Backend Error Types
 *
 * This module defines the two failure shapes used by the RPC handlers.
 *
 * # Transport-level faults
 *
 * `BackendError` aborts a call. It is converted into a `tonic::Status`
 * (or an HTTP response for the JSON routes):
 * - `NotFound` - a looked-up row does not exist
 * - `UnknownRoute` - no HTTP route matches
 * - `InvalidArgument` - a request field could not be interpreted
 * - `Unauthorized` - missing or rejected bearer token (HTTP only)
 * - `MalformedBody` - a JSON body that does not decode (HTTP only)
 * - `Rejected` - a gRPC handler refused a call made through the JSON routes
 * - `Database` / `Token` / `Password` - unexpected faults, reported as internal
 *
 * # Application-level outcomes
 *
 * `ActionOutcome` is a successful call whose payload says whether the
 * requested action happened. Write and auth operations use it so callers can
 * tell "wrong password" or "duplicate email" apart from a broken transport.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;
use tonic::{Code, Status};

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use domunity::backend::error::BackendError;
///
/// let err = BackendError::not_found("Building");
/// assert_eq!(err.message(), "Building not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The requested row does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Human-readable resource name ("User", "Building")
        resource: &'static str,
    },

    /// No HTTP route matches the request path
    #[error("Not found")]
    UnknownRoute,

    /// A request field could not be interpreted
    #[error(transparent)]
    InvalidArgument(#[from] SharedError),

    /// No valid bearer token on a protected route
    #[error("Unauthorized")]
    Unauthorized,

    /// The request body is not the expected JSON
    #[error("{}", .0.body_text())]
    MalformedBody(#[from] JsonRejection),

    /// A service call answered with a non-OK status
    #[error("{}", .0.message())]
    Rejected(#[from] Status),

    /// Datastore failure
    ///
    /// The driver message is passed to the caller verbatim.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Token signing or verification failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a not-found error for a resource
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// gRPC status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound`, `UnknownRoute` - `NOT_FOUND`
    /// - `InvalidArgument`, `MalformedBody` - `INVALID_ARGUMENT`
    /// - `Unauthorized` - `UNAUTHENTICATED`
    /// - `Rejected` - the carried status code
    /// - everything else - `INTERNAL`
    pub fn grpc_code(&self) -> Code {
        match self {
            Self::NotFound { .. } | Self::UnknownRoute => Code::NotFound,
            Self::InvalidArgument(_) | Self::MalformedBody(_) => Code::InvalidArgument,
            Self::Unauthorized => Code::Unauthenticated,
            Self::Rejected(status) => status.code(),
            Self::Database(_) | Self::Token(_) | Self::Password(_) => Code::Internal,
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::UnknownRoute => StatusCode::NOT_FOUND,
            Self::InvalidArgument(_) | Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Rejected(status) => match status.code() {
                Code::NotFound => StatusCode::NOT_FOUND,
                Code::InvalidArgument => StatusCode::BAD_REQUEST,
                Code::Unauthenticated => StatusCode::UNAUTHORIZED,
                Code::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Token(_) | Self::Password(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message sent to the caller
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Application-level result of a write or auth operation
///
/// Always travels inside a successful RPC response as `{success, message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Whether the requested action took effect
    pub success: bool,
    /// Message shown to the caller
    pub message: String,
}

impl ActionOutcome {
    /// The action succeeded
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// The action did not take effect
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Fold a backend result into an outcome
    ///
    /// Errors become `success: false` carrying the error message verbatim.
    pub fn from_result<T>(result: &Result<T, BackendError>, ok_message: &str) -> Self {
        match result {
            Ok(_) => Self::ok(ok_message),
            Err(err) => Self::failed(err.message()),
        }
    }
}
