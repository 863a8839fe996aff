//! Unit model.
//!
//! A unit is a named task competing for study time. Its difficulty is the
//! weight that decides its share of the available hours.

use serde::{Deserialize, Serialize};

/// A unit (subject, course, task) to be allocated time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique unit name.
    pub name: String,
    /// Difficulty weight, expected in `1..=10`.
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
}

fn default_difficulty() -> u8 {
    Unit::DEFAULT_DIFFICULTY
}

impl Unit {
    /// Lowest accepted difficulty.
    pub const MIN_DIFFICULTY: u8 = 1;
    /// Highest accepted difficulty.
    pub const MAX_DIFFICULTY: u8 = 10;
    /// Difficulty assumed when none is given.
    pub const DEFAULT_DIFFICULTY: u8 = 5;

    /// Creates a new unit.
    pub fn new(name: impl Into<String>, difficulty: u8) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }

    /// Whether the difficulty lies in the accepted range.
    pub fn has_valid_difficulty(&self) -> bool {
        (Self::MIN_DIFFICULTY..=Self::MAX_DIFFICULTY).contains(&self.difficulty)
    }
}
