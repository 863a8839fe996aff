//! Error taxonomy for timetable allocation.
//!
//! Every variant is a caller-input error: the allocator refuses to run
//! rather than produce a partial schedule. Leftover budget after packing
//! is not an error and never surfaces here.

use chrono::NaiveTime;
use thiserror::Error;

use crate::models::Day;

/// Allocation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// No units were supplied, or the windows offer no whole hour.
    #[error("insufficient input: {0}")]
    InsufficientInput(String),

    /// Unit difficulties sum to zero, so no share can be computed.
    #[error("unit difficulties sum to zero")]
    DegenerateWeight,

    /// Two units share the same name.
    #[error("duplicate unit name: {name}")]
    DuplicateUnit { name: String },

    /// A window whose start is not before its end.
    #[error("invalid window on {day}: {start} is not before {end}")]
    InvalidWindow {
        day: Day,
        start: NaiveTime,
        end: NaiveTime,
    },

    /// A time-of-day string that could not be parsed.
    #[error("invalid time of day: {0}")]
    InvalidTime(String),
}

/// Result alias for allocation operations.
pub type Result<T> = std::result::Result<T, TimetableError>;
