//! Driver configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `SHUFFLE_COUNT`: number of elements to insert (optional, default: 19, at least 1)
//! - `SHUFFLE_SEED`: `u64` seed for a reproducible permutation (optional)
//!
//! A `.env` file in the working directory is loaded first when present.

use std::env;
use thiserror::Error;

/// Element count used when `SHUFFLE_COUNT` is not set.
pub const DEFAULT_COUNT: u32 = 19;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `SHUFFLE_COUNT` is not a positive integer.
    #[error("Invalid SHUFFLE_COUNT: {message} (got '{value}')")]
    InvalidCount {
        /// Error message.
        message: String,
        /// Actual value.
        value: String,
    },

    /// `SHUFFLE_SEED` is not a `u64`.
    #[error("Invalid SHUFFLE_SEED: {message} (got '{value}')")]
    InvalidSeed {
        /// Error message.
        message: String,
        /// Actual value.
        value: String,
    },
}

/// Settings for one driver run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShuffleConfig {
    /// Elements `1..=count` are inserted.
    pub count: u32,
    /// Seed for the permutation. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
        }
    }
}

impl ShuffleConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an invalid value.
    /// Missing variables use default values.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let count = lookup("SHUFFLE_COUNT").map_or(Ok(DEFAULT_COUNT), |value| parse_count(&value))?;
        let seed = lookup("SHUFFLE_SEED")
            .map(|value| parse_seed(&value))
            .transpose()?;
        Ok(Self { count, seed })
    }
}

fn parse_count(value: &str) -> Result<u32, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidCount {
        message,
        value: value.to_string(),
    };
    let count: u32 = value
        .trim()
        .parse()
        .map_err(|error: std::num::ParseIntError| invalid(error.to_string()))?;
    if count == 0 {
        return Err(invalid("must be at least 1".to_string()));
    }
    Ok(count)
}

fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|error: std::num::ParseIntError| ConfigError::InvalidSeed {
            message: error.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let variables: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| variables.get(key).cloned()
    }

    // =========================================================================
    // ShuffleConfig::from_lookup Tests
    // =========================================================================

    #[rstest]
    fn missing_variables_use_defaults() {
        let config = ShuffleConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ShuffleConfig::default());
        assert_eq!(config.count, 19);
        assert_eq!(config.seed, None);
    }

    #[rstest]
    fn both_variables_are_read() {
        let config =
            ShuffleConfig::from_lookup(lookup_from(&[("SHUFFLE_COUNT", "64"), ("SHUFFLE_SEED", "7")]))
                .unwrap();
        assert_eq!(config.count, 64);
        assert_eq!(config.seed, Some(7));
    }

    #[rstest]
    fn surrounding_whitespace_is_ignored() {
        let config = ShuffleConfig::from_lookup(lookup_from(&[("SHUFFLE_COUNT", " 5 ")])).unwrap();
        assert_eq!(config.count, 5);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("many")]
    fn invalid_count_is_rejected(#[case] value: &str) {
        let result = ShuffleConfig::from_lookup(lookup_from(&[("SHUFFLE_COUNT", value)]));
        assert!(matches!(result, Err(ConfigError::InvalidCount { .. })));
    }

    #[rstest]
    fn invalid_seed_is_rejected() {
        let result = ShuffleConfig::from_lookup(lookup_from(&[("SHUFFLE_SEED", "0x10")]));
        assert!(matches!(result, Err(ConfigError::InvalidSeed { .. })));
    }

    // =========================================================================
    // ConfigError Tests
    // =========================================================================

    #[rstest]
    fn config_error_display() {
        let error = ConfigError::InvalidCount {
            message: "must be at least 1".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "Invalid SHUFFLE_COUNT: must be at least 1 (got '0')"
        );
    }
}
