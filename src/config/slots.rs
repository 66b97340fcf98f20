//! Slot capacity configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Capacity policy for newly created slots
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SlotConfig {
    /// Group size applied when a creator does not request one
    #[serde(default = "default_max_capacity")]
    pub default_max_capacity: u32,

    /// Largest group size a creator may request
    #[serde(default = "default_capacity_limit")]
    pub max_capacity_limit: u32,
}

impl SlotConfig {
    /// Validate slot configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_max_capacity == 0 || self.max_capacity_limit == 0 {
            return Err(ValidationError::InvalidSlotCapacity);
        }
        if self.default_max_capacity > self.max_capacity_limit {
            return Err(ValidationError::DefaultCapacityTooLarge);
        }
        Ok(())
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            default_max_capacity: default_max_capacity(),
            max_capacity_limit: default_capacity_limit(),
        }
    }
}

fn default_max_capacity() -> u32 {
    4
}

fn default_capacity_limit() -> u32 {
    50
}
