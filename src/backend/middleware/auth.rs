/**
 * Authentication Extractor
 *
 * Protects JSON routes that act on behalf of the caller. The access token
 * issued at login (or by a refresh) is read from the `Authorization` header
 * and verified with the server's `SessionKeys`. The token's `sub` becomes
 * the user id handed to the handler.
 *
 * Any missing, malformed, expired or wrongly signed token rejects the
 * request with 401 before the handler runs.
 */

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::auth::SessionKeys;
use crate::backend::error::BackendError;
use crate::shared::parse_id;

/// Caller identity taken from a verified bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    /// Present on tokens issued at login, absent on refreshed ones
    pub email: Option<String>,
}

/// Pull the token out of an `Authorization: Bearer <token>` header
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl<S> FromRequestParts<S> for AuthUser
where
    SessionKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            tracing::warn!("Missing or malformed Authorization header");
            BackendError::Unauthorized
        })?;

        let sessions = SessionKeys::from_ref(state);
        let claims = sessions.verify_token(token).map_err(|e| {
            tracing::warn!("Invalid token: {}", e);
            BackendError::Unauthorized
        })?;

        let user_id = parse_id("sub", &claims.sub).map_err(|e| {
            tracing::warn!("Token subject is not a user id: {}", e);
            BackendError::Unauthorized
        })?;

        Ok(AuthUser {
            user_id,
            email: claims.email,
        })
    }
}
