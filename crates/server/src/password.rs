//! Password hashing with Argon2id.
//!
//! Hashes are stored in PHC string format, so parameters and salt travel
//! with the hash and verification needs no extra configuration.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::ServerError;

/// Hashes a clear-text password with a fresh random salt.
pub fn hash(password: &str) -> Result<String, ServerError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| ServerError::Generic(format!("failed to hash password: {err}")))?;
    Ok(hash.to_string())
}

/// Verifies a clear-text password against a stored PHC hash.
///
/// An unparsable stored hash counts as a failed verification.
pub fn verify(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
