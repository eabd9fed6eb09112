//! Hasher configuration.

use thiserror::Error;

use crate::cost::{Cost, MAX_COST, MIN_COST};

/// Environment variable overriding [`HasherConfig::default_cost`].
pub const DEFAULT_COST_VAR: &str = "PWHASH_DEFAULT_COST";

/// Environment variable overriding [`HasherConfig::min_password_len`].
pub const MIN_PASSWORD_LEN_VAR: &str = "PWHASH_MIN_PASSWORD_LENGTH";

/// Minimum password length when nothing is configured.
pub const DEFAULT_MIN_PASSWORD_LEN: usize = 4;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Settings for [`PasswordHasher`](crate::PasswordHasher).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HasherConfig {
    /// Cost used when the caller omits one.
    pub default_cost: Cost,
    /// Passwords shorter than this many characters are refused.
    pub min_password_len: usize,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            default_cost: Cost::default(),
            min_password_len: DEFAULT_MIN_PASSWORD_LEN,
        }
    }
}

impl HasherConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                     | Default |
    /// |------------------------------|---------|
    /// | `PWHASH_DEFAULT_COST`        | `4`     |
    /// | `PWHASH_MIN_PASSWORD_LENGTH` | `4`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(DEFAULT_COST_VAR) {
            config.default_cost = parse_cost(DEFAULT_COST_VAR, &value)?;
        }
        if let Some(value) = get(MIN_PASSWORD_LEN_VAR) {
            config.min_password_len =
                value
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: MIN_PASSWORD_LEN_VAR.to_string(),
                        value: value.clone(),
                        reason: e.to_string(),
                    })?;
        }

        Ok(config)
    }
}

fn parse_cost(key: &str, value: &str) -> Result<Cost, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason,
    };
    let cost = value.trim().parse::<u32>().map_err(|e| invalid(e.to_string()))?;
    Cost::new(cost).map_err(|_| invalid(format!("must be between {MIN_COST} and {MAX_COST}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = HasherConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, HasherConfig::default());
        assert_eq!(config.default_cost.get(), 4);
        assert_eq!(config.min_password_len, 4);
    }

    #[test]
    fn reads_overrides() {
        let config = HasherConfig::from_lookup(lookup(&[
            (DEFAULT_COST_VAR, "12"),
            (MIN_PASSWORD_LEN_VAR, " 10 "),
        ]))
        .unwrap();
        assert_eq!(config.default_cost.get(), 12);
        assert_eq!(config.min_password_len, 10);
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let config = HasherConfig::from_lookup(lookup(&[(DEFAULT_COST_VAR, "")])).unwrap();
        assert_eq!(config.default_cost.get(), 4);
    }

    #[test]
    fn rejects_out_of_range_cost() {
        let err = HasherConfig::from_lookup(lookup(&[(DEFAULT_COST_VAR, "40")])).unwrap_err();
        let ConfigError::InvalidValue { key, value, .. } = err;
        assert_eq!(key, DEFAULT_COST_VAR);
        assert_eq!(value, "40");
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert!(HasherConfig::from_lookup(lookup(&[(DEFAULT_COST_VAR, "high")])).is_err());
        assert!(HasherConfig::from_lookup(lookup(&[(MIN_PASSWORD_LEN_VAR, "-1")])).is_err());
    }
}
