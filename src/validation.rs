//! Input validation for allocation requests.
//!
//! Checks caller-supplied units and windows before planning and reports
//! every problem at once, so a form layer can show them all. Detects:
//! - Missing units or no bookable hours
//! - Duplicate or empty unit names
//! - Difficulties outside `1..=10`
//! - Inverted windows and overlapping windows on the same day
//!
//! The planner itself only rejects what would make planning impossible;
//! this module is the stricter gate for user input.

use std::collections::HashSet;

use crate::models::{total_hours, Unit, Window};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No units were supplied.
    NoUnits,
    /// Windows offer no whole bookable hour.
    NoCapacity,
    /// Two units share the same name.
    DuplicateUnit,
    /// A unit name is empty or whitespace.
    EmptyUnitName,
    /// A difficulty lies outside `1..=10`.
    DifficultyOutOfRange,
    /// A window's start is not before its end.
    InvalidWindow,
    /// Two windows on the same day overlap.
    OverlappingWindows,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates units and windows for an allocation run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(units: &[Unit], windows: &[Window]) -> ValidationResult {
    let mut errors = Vec::new();

    if units.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoUnits,
            "Please add at least one unit",
        ));
    }

    let mut names = HashSet::new();
    for unit in units {
        if unit.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyUnitName,
                "Unit name must not be empty",
            ));
        } else if !names.insert(unit.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateUnit,
                format!("Duplicate unit name: {}", unit.name),
            ));
        }

        if !unit.has_valid_difficulty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DifficultyOutOfRange,
                format!(
                    "Unit '{}' has difficulty {} (expected {}-{})",
                    unit.name,
                    unit.difficulty,
                    Unit::MIN_DIFFICULTY,
                    Unit::MAX_DIFFICULTY
                ),
            ));
        }
    }

    for window in windows {
        if window.start >= window.end {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!(
                    "Window on {} starts at {} but ends at {}",
                    window.day,
                    window.start.format("%H:%M"),
                    window.end.format("%H:%M")
                ),
            ));
        }
    }

    for (i, a) in windows.iter().enumerate() {
        for b in &windows[i + 1..] {
            if a.overlaps(b) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingWindows,
                    format!(
                        "Windows on {} overlap: {}-{} and {}-{}",
                        a.day,
                        a.start.format("%H:%M"),
                        a.end.format("%H:%M"),
                        b.start.format("%H:%M"),
                        b.end.format("%H:%M")
                    ),
                ));
            }
        }
    }

    if total_hours(windows) == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoCapacity,
            "Please add availability of at least one hour",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
