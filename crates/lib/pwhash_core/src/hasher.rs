//! Password hashing service backed by the `bcrypt` crate.

use log::debug;
use thiserror::Error;

use crate::config::HasherConfig;
use crate::cost::{Cost, MAX_COST, MIN_COST};
use crate::hash::PasswordHash;

/// bcrypt only reads this many bytes of a password.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing errors.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported cost {0}: must be between {min} and {max}", min = MIN_COST, max = MAX_COST)]
    UnsupportedCost(u32),

    #[error("Malformed hash: {0}")]
    MalformedHash(String),

    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Hashes and verifies passwords.
///
/// Holds nothing but its configuration, so it is `Copy` and can be shared
/// freely across threads. [`hash`](Self::hash) runs `2^cost` rounds and
/// blocks the calling thread for the whole computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher {
    config: HasherConfig,
}

impl PasswordHasher {
    pub fn new(config: HasherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Hash `password` with a fresh random salt at the given cost.
    ///
    /// Passwords longer than [`MAX_PASSWORD_BYTES`] are rejected rather than
    /// silently truncated.
    pub fn hash(&self, password: &str, cost: u32) -> Result<PasswordHash, HashError> {
        self.check_min_length(password)?;
        check_max_length(password)?;
        let cost = Cost::new(cost)?;

        debug!("hashing password at cost {cost}");
        let token = bcrypt::hash(password, cost.get()).map_err(|e| match e {
            bcrypt::BcryptError::CostNotAllowed(c) => HashError::UnsupportedCost(c),
            other => HashError::Encoding(format!("bcrypt hash: {other}")),
        })?;

        token
            .parse()
            .map_err(|e| HashError::Encoding(format!("bcrypt produced an unreadable hash: {e}")))
    }

    /// Hash `password` at the configured default cost.
    pub fn hash_default(&self, password: &str) -> Result<PasswordHash, HashError> {
        self.hash(password, self.config.default_cost.get())
    }

    /// Check `password` against `hash`.
    ///
    /// A wrong password is `Ok(false)`. Digests are compared in constant time
    /// by `bcrypt::verify`.
    pub fn verify(&self, hash: &str, password: &str) -> Result<bool, HashError> {
        let hash: PasswordHash = hash.parse()?;
        check_max_length(password)?;

        debug!(
            "verifying password against ${}$ hash at cost {}",
            hash.variant(),
            hash.cost()
        );
        bcrypt::verify(password, hash.as_str())
            .map_err(|e| HashError::MalformedHash(format!("bcrypt verify: {e}")))
    }

    /// Read the cost factor out of `hash` without hashing anything.
    pub fn extract_cost(hash: &str) -> Result<Cost, HashError> {
        hash.parse::<PasswordHash>().map(|h| h.cost())
    }

    fn check_min_length(&self, password: &str) -> Result<(), HashError> {
        let min = self.config.min_password_len;
        if password.chars().count() < min {
            return Err(HashError::InvalidInput(format!(
                "password must be at least {min} characters long"
            )));
        }
        Ok(())
    }
}

fn check_max_length(password: &str) -> Result<(), HashError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(HashError::Encoding(format!(
            "password is {} bytes, bcrypt accepts at most {MAX_PASSWORD_BYTES}",
            password.len()
        )));
    }
    Ok(())
}
