//! Run configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::packer::{PackerConfig, SelectionPolicy};

/// Configuration for one allocation run and its reminders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationConfig {
    /// Unit selection policy for the packer.
    pub policy: SelectionPolicy,
    /// Largest randomized grant (hours).
    pub max_step_hours: u32,
    /// Fixed seed for the randomized policy.
    pub seed: Option<u64>,
    /// How long before a session its reminder fires (minutes).
    pub reminder_offset_minutes: i64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        let packer = PackerConfig::default();
        Self {
            policy: packer.policy,
            max_step_hours: packer.max_step_hours,
            seed: packer.seed,
            reminder_offset_minutes: 15,
        }
    }
}

impl AllocationConfig {
    /// Packer settings derived from this configuration.
    pub fn packer_config(&self) -> PackerConfig {
        PackerConfig {
            policy: self.policy,
            max_step_hours: self.max_step_hours,
            seed: self.seed,
        }
    }

    /// Reminder offset as a duration.
    pub fn reminder_offset(&self) -> Duration {
        Duration::minutes(self.reminder_offset_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: AllocationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AllocationConfig::default());
        assert_eq!(config.policy, SelectionPolicy::Greedy);
        assert_eq!(config.reminder_offset(), Duration::minutes(15));
    }

    #[test]
    fn test_partial_override() {
        let config: AllocationConfig =
            serde_json::from_str(r#"{"policy": "randomized", "seed": 42}"#).unwrap();
        let packer = config.packer_config();
        assert_eq!(packer.policy, SelectionPolicy::Randomized);
        assert_eq!(packer.seed, Some(42));
        assert_eq!(packer.max_step_hours, 2);
    }
}
