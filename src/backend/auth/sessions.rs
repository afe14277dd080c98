/**
 * Session Tokens
 *
 * HS256 JSON Web Tokens signed with the server secret. There is no session
 * store: a token is valid exactly when its signature checks out and it has
 * not expired.
 *
 * # Token kinds
 *
 * - Access token - 24 hours, carries `sub` (user id) and `email`
 * - Refresh token - 30 days, carries only `sub`
 *
 * An access token minted from a refresh token also carries only `sub`.
 */

use std::fmt;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Lifetime of an access token in seconds
pub const ACCESS_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Lifetime of a refresh token in seconds
pub const REFRESH_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID, as a decimal string
    pub sub: String,
    /// Email, present on tokens issued at login
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing and verification keys derived from the server secret
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys").finish_non_exhaustive()
    }
}

impl SessionKeys {
    /// Build keys from the shared secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Create an access token for a user
    ///
    /// # Arguments
    /// * `user_id` - User row id
    /// * `email` - User email, embedded in the token
    ///
    /// # Returns
    /// JWT token string
    pub fn create_access_token(&self, user_id: i32, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.sign(user_id.to_string(), Some(email.to_string()), ACCESS_TOKEN_TTL_SECS)
    }

    /// Create a refresh token for a user
    pub fn create_refresh_token(&self, user_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
        self.sign(user_id.to_string(), None, REFRESH_TOKEN_TTL_SECS)
    }

    /// Verify and decode a token
    ///
    /// Fails on a bad signature, a malformed token or an expired one.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(token_data.claims)
    }

    /// Exchange a refresh token for a new access token
    ///
    /// Any token that verifies is accepted. The new token is bound to the
    /// same `sub` and carries no email.
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = self.verify_token(refresh_token)?;
        self.sign(claims.sub, None, ACCESS_TOKEN_TTL_SECS)
    }

    fn sign(&self, sub: String, email: Option<String>, ttl_secs: u64) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();
        let claims = Claims {
            sub,
            email,
            exp: now + ttl_secs,
            iat: now,
        };
        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }
}

fn unix_now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0)
}
