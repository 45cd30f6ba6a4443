//! Password hashing.
//!
//! Hashes are Argon2id PHC strings with a random salt per password. Hashes
//! from the old SHA-256 scheme will not verify and those accounts have to sign
//! up again.

use argon2::{
    password_hash::{self, rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use std::sync::LazyLock;

/// A hash no submitted password will match, made with the same parameters as
/// real ones so checking against it costs the same.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash(&crate::token::generate()).ok());

/// Hash a plaintext password for storage.
///
/// ## Errors
///
/// Only if Argon2 rejects its inputs, which the default parameters don't.
pub fn hash(password: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Check a plaintext password against a stored hash.
///
/// ## Errors
///
/// If the stored hash can't be parsed or verification fails for a reason
/// other than a wrong password.
pub fn verify(password: &str, hash: &str) -> Result<bool, password_hash::Error> {
    let hash = PasswordHash::new(hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &hash) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Do the work of `verify` for a login that has no account behind it, so
/// response times don't reveal which emails are registered. Returns whether
/// a hash was actually checked.
pub fn verify_dummy(password: &str) -> bool {
    match DUMMY_HASH.as_deref() {
        Some(hash) => {
            let _ = verify(password, hash);
            true
        }
        None => {
            tracing::warn!("no dummy hash; unknown-email logins will return early");
            false
        }
    }
}
