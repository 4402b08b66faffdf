//! Type definitions for simbld_passgen
//!
//! Contains the shared error type and the generator configuration model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of full generation attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Default number of redraws allowed for a single position
pub const DEFAULT_MAX_REDRAWS: u32 = 100;

/// Password generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password length must be between {min} and {max}, got {length}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("At least one character class must be enabled")]
    EmptyAlphabet,

    #[error("Alphabet of {0} character(s) can't satisfy the consecutive character limit")]
    AlphabetTooSmall(usize),

    #[error("No valid password after {0} attempts")]
    NotConverged(u32),

    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },
}

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Full regenerations allowed before `NotConverged`
    pub max_attempts: u32,
    /// Redraws allowed at one position before the attempt is abandoned
    pub max_redraws: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_redraws: DEFAULT_MAX_REDRAWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PasswordError::LengthOutOfRange {
            length: 11,
            min: 12,
            max: 64,
        };
        assert_eq!(err.to_string(), "Password length must be between 12 and 64, got 11");
        assert_eq!(
            PasswordError::NotConverged(5).to_string(),
            "No valid password after 5 attempts"
        );
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.max_redraws, DEFAULT_MAX_REDRAWS);
    }
}
