//! Match result limit configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Result sizing for match queries
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MatchingConfig {
    /// Result count when the caller does not request one
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Largest result count a caller may request
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl MatchingConfig {
    /// Validate matching configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_limit == 0 || self.max_limit == 0 {
            return Err(ValidationError::InvalidMatchLimit);
        }
        if self.default_limit > self.max_limit {
            return Err(ValidationError::DefaultMatchLimitTooLarge);
        }
        Ok(())
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = MatchingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_limit, 10);
    }

    #[test]
    fn default_above_max_is_invalid() {
        let config = MatchingConfig {
            default_limit: 100,
            max_limit: 50,
        };
        assert!(config.validate().is_err());
    }
}
