//! # pwhash_core
//!
//! Password hashing service for pwhash.
//!
//! Wraps the `bcrypt` crate behind three operations: hash a password,
//! verify a password against a hash, and read the cost factor out of a hash.

pub mod config;
pub mod cost;
pub mod hash;
pub mod hasher;

pub use config::{ConfigError, HasherConfig};
pub use cost::{Cost, DEFAULT_COST, MAX_COST, MIN_COST, RECOMMENDED_COST};
pub use hash::PasswordHash;
pub use hasher::{HashError, MAX_PASSWORD_BYTES, PasswordHasher};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
