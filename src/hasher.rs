//! Secret hashing behind a narrow trait.
//!
//! Hashes are PHC strings produced by Argon2id. The trait exposes two
//! operations: creating a hash with a fresh random salt, and recomputing a
//! candidate hash with the salt and parameters of an existing stored hash so
//! the caller can run its own constant-time comparison against the stored
//! value.

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::SaltString, Argon2, Params, PasswordHash, PasswordHasher,
};
use rand::rngs::OsRng;

/// Adaptive password-hashing primitive consumed by the auth service.
///
/// Implementations must be deterministic for a given (secret, salt, params)
/// triple; the sign-in path relies on recomputation producing a byte-for-byte
/// identical PHC string for the correct secret.
pub trait SecretHasher: Send + Sync {
    /// Hash a secret with a freshly generated random salt.
    fn create_hash(&self, secret: &str) -> Result<String>;

    /// Recompute a candidate hash reusing the salt, algorithm, version and
    /// parameters of `stored`, a PHC-formatted hash string.
    ///
    /// A stored hash that cannot be parsed is a fault, not a mismatch.
    fn recompute_hash(&self, secret: &str, stored: &str) -> Result<String>;
}

/// Default [`SecretHasher`] backed by Argon2id with library-default params.
#[derive(Clone, Copy, Debug, Default)]
pub struct Argon2Hasher;

impl SecretHasher for Argon2Hasher {
    fn create_hash(&self, secret: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|err| anyhow!("failed to hash secret: {err}"))?;
        Ok(hash.to_string())
    }

    fn recompute_hash(&self, secret: &str, stored: &str) -> Result<String> {
        let parsed = PasswordHash::new(stored)
            .map_err(|err| anyhow!("invalid stored secret hash: {err}"))?;
        let params = Params::try_from(&parsed)
            .map_err(|err| anyhow!("invalid stored secret hash params: {err}"))?;
        let salt = parsed
            .salt
            .ok_or_else(|| anyhow!("stored secret hash has no salt"))?;
        let candidate = Argon2::default()
            .hash_password_customized(
                secret.as_bytes(),
                Some(parsed.algorithm),
                parsed.version,
                params,
                salt,
            )
            .map_err(|err| anyhow!("failed to recompute secret hash: {err}"))?;
        Ok(candidate.to_string())
    }
}
