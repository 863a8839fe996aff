//! Unit selection policies and packer configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the packer picks the next unit inside a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Always pick the unit with the strictly largest remaining budget
    /// (ties go to the first-seen unit) and grant as much as fits.
    ///
    /// Fills every window completely whenever the remaining budget covers it.
    #[default]
    Greedy,
    /// Shuffle the units with remaining budget once per window and walk that
    /// order a single time, granting a random small step to each.
    ///
    /// Gives variety between runs, but a window may fill up before every
    /// shuffled unit is reached, so some units can be starved.
    Randomized,
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::Greedy => f.write_str("greedy"),
            SelectionPolicy::Randomized => f.write_str("randomized"),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(SelectionPolicy::Greedy),
            "randomized" | "random" => Ok(SelectionPolicy::Randomized),
            other => Err(format!("unknown selection policy: {other}")),
        }
    }
}

/// Slot packer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Unit selection policy.
    pub policy: SelectionPolicy,
    /// Largest randomized grant in hours; each grant draws from `1..=max_step_hours`.
    pub max_step_hours: u32,
    /// Seed for the randomized policy. `None` = OS entropy.
    pub seed: Option<u64>,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::Greedy,
            max_step_hours: 2,
            seed: None,
        }
    }
}

impl PackerConfig {
    /// Randomized step bound, never below one hour.
    #[inline]
    pub fn effective_max_step(&self) -> u32 {
        self.max_step_hours.max(1)
    }
}
