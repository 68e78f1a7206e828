//! Password hashing behind a swappable interface.
//!
//! `SaltedSha256` reproduces the stored `salt$hash` format byte for byte.
//! It has no work factor and is kept only for compatibility with existing
//! records; `Argon2Hasher` is the memory-hard replacement and still
//! verifies legacy hashes.

use std::sync::Arc;

use argon2::{
    password_hash::{
        rand_core::OsRng as PhcRng, PasswordHash, PasswordHasher as _, PasswordVerifier as _,
        SaltString,
    },
    Argon2,
};
use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::config::{PasswordScheme, PASSWORD_HASH_SEPARATOR, SALT_BYTES};
use crate::errors::{AppError, AppResult};

/// Computes and checks stored password hashes.
pub trait PasswordHasher: Send + Sync {
    /// Produce a storable hash for a plain text password.
    fn hash(&self, plain_text: &str) -> AppResult<String>;

    /// Check a plain text password against a stored hash.
    fn verify(&self, plain_text: &str, stored: &str) -> AppResult<bool>;
}

/// `salt$hex(sha256(salt ++ password))` with an 8-byte hex salt.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaltedSha256;

impl SaltedSha256 {
    /// Hex digest of the salt concatenated with the password.
    pub fn digest(salt: &str, plain_text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(plain_text.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn generate_salt() -> String {
        let mut bytes = [0u8; SALT_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

impl PasswordHasher for SaltedSha256 {
    fn hash(&self, plain_text: &str) -> AppResult<String> {
        let salt = Self::generate_salt();
        let digest = Self::digest(&salt, plain_text);
        Ok(format!("{}{}{}", salt, PASSWORD_HASH_SEPARATOR, digest))
    }

    fn verify(&self, plain_text: &str, stored: &str) -> AppResult<bool> {
        let (salt, saved) = stored
            .split_once(PASSWORD_HASH_SEPARATOR)
            .ok_or_else(|| AppError::bad_request("Malformed password hash"))?;
        Ok(Self::digest(salt, plain_text) == saved)
    }
}

/// Argon2id with default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    const PHC_PREFIX: &'static str = "$argon2";

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut PhcRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plain_text: &str, stored: &str) -> AppResult<bool> {
        // Records written before the switch keep the legacy format
        if !stored.starts_with(Self::PHC_PREFIX) {
            return SaltedSha256.verify(plain_text, stored);
        }

        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }
}

/// Hasher used for new registrations under the configured scheme.
pub fn hasher_for(scheme: PasswordScheme) -> Arc<dyn PasswordHasher> {
    match scheme {
        PasswordScheme::SaltedSha256 => Arc::new(SaltedSha256),
        PasswordScheme::Argon2 => Arc::new(Argon2Hasher),
    }
}
