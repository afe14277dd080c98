/**
 * Password Hashing
 *
 * bcrypt with a fixed cost. Hashes embed their own salt and cost, so a
 * stored hash can be verified without knowing how it was produced.
 */

use bcrypt::BcryptError;

/// bcrypt cost factor for new hashes
pub const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, BCRYPT_COST)
}

/// Check a plaintext password against a stored hash
///
/// A stored value that is not a valid bcrypt hash never matches; the parse
/// failure is logged and reported as a mismatch.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    match bcrypt::verify(password, password_hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("Stored password hash could not be verified: {}", e);
            false
        }
    }
}
