//! Password hashing with bcrypt.
//!
//! Hashes are stored in the modular crypt format (`$2b$<cost>$<salt+digest>`), so the
//! cost travels with each hash and can be raised without invalidating stored ones.

use bcrypt::BcryptError;

#[cfg(not(test))]
const COST: u32 = bcrypt::DEFAULT_COST;
// Lowest cost bcrypt accepts; tests only.
#[cfg(test)]
const COST: u32 = 4;

/// Minimum accepted length for a new password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// bcrypt only reads the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hashes `password` under a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, COST)
}

/// Checks `password` against a stored hash.
///
/// # Returns
/// - `Some(true)` - Password matches
/// - `Some(false)` - Password does not match
/// - `None` - Stored hash is not a readable bcrypt hash
pub fn verify_password(stored: &str, password: &str) -> Option<bool> {
    bcrypt::verify(password, stored).ok()
}

/// Rejects passwords too short to be stored, or too long to be hashed whole.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(format!(
            "Password must be at most {} bytes",
            MAX_PASSWORD_BYTES
        ));
    }
    Ok(())
}
