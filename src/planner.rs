//! Allocation planner: difficulty-weighted hour budgets.
//!
//! # Algorithm
//!
//! ```text
//! total_difficulty = Σ difficulty(u)
//! total_hours      = Σ duration_hours(w)
//! budget(u)        = max(1, ⌊difficulty(u) · total_hours / total_difficulty⌋)
//! ```
//!
//! Each budget is computed independently, so unit order does not change
//! any value. The `max(1, …)` floor means the budgets may sum to more than
//! the available hours; the packer caps every grant, so overflow is never
//! scheduled.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Result, TimetableError};
use crate::models::{total_hours, Budget, Unit, Window};

/// Computes the per-unit hour budget for one allocation run.
///
/// # Errors
/// - [`TimetableError::InsufficientInput`] if `units` is empty or the
///   windows offer no whole hour.
/// - [`TimetableError::DuplicateUnit`] if two units share a name.
/// - [`TimetableError::DegenerateWeight`] if all difficulties are zero.
pub fn plan(units: &[Unit], windows: &[Window]) -> Result<Budget> {
    if units.is_empty() {
        return Err(TimetableError::InsufficientInput("no units supplied".into()));
    }

    let mut seen = HashSet::with_capacity(units.len());
    for unit in units {
        if !seen.insert(unit.name.as_str()) {
            return Err(TimetableError::DuplicateUnit {
                name: unit.name.clone(),
            });
        }
    }

    let total_hours = total_hours(windows);
    if total_hours == 0 {
        return Err(TimetableError::InsufficientInput(
            "windows offer no bookable hours".into(),
        ));
    }

    let total_difficulty: u64 = units.iter().map(|u| u64::from(u.difficulty)).sum();
    if total_difficulty == 0 {
        return Err(TimetableError::DegenerateWeight);
    }

    let budget: Budget = units
        .iter()
        .map(|u| {
            let share = u64::from(u.difficulty) * u64::from(total_hours) / total_difficulty;
            // share <= total_hours, which fits in u32
            let hours = u32::try_from(share).unwrap_or(total_hours).max(1);
            (u.name.as_str(), hours)
        })
        .collect();

    debug!(
        units = units.len(),
        total_hours,
        total_difficulty,
        budgeted = budget.total_hours(),
        "planned budget"
    );

    Ok(budget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    fn windows() -> Vec<Window> {
        vec![
            Window::parse(Day::Mon, "08:00", "10:00").unwrap(),
            Window::parse(Day::Mon, "13:00", "14:00").unwrap(),
        ]
    }

    #[test]
    fn test_plan_proportional() {
        let units = vec![Unit::new("Math", 8), Unit::new("History", 2)];
        let budget = plan(&units, &windows()).unwrap();

        assert_eq!(budget.get("Math"), Some(2)); // floor(0.8 * 3)
        assert_eq!(budget.get("History"), Some(1)); // max(1, floor(0.2 * 3))
        assert_eq!(budget.total_hours(), 3);
    }

    #[test]
    fn test_plan_minimum_one_hour() {
        let units = vec![
            Unit::new("A", 10),
            Unit::new("B", 1),
            Unit::new("C", 1),
        ];
        let budget = plan(&units, &windows()).unwrap();

        // floor(10/12 * 3) = 2; B and C would get 0 without the floor
        assert_eq!(budget.get("A"), Some(2));
        assert_eq!(budget.get("B"), Some(1));
        assert_eq!(budget.get("C"), Some(1));
        assert!(budget.total_hours() > total_hours(&windows()));
    }

    #[test]
    fn test_plan_order_independent() {
        let a = vec![Unit::new("Math", 7), Unit::new("Art", 3), Unit::new("Bio", 5)];
        let b = vec![Unit::new("Bio", 5), Unit::new("Math", 7), Unit::new("Art", 3)];
        let ba = plan(&a, &windows()).unwrap();
        let bb = plan(&b, &windows()).unwrap();

        for (unit, hours) in ba.iter() {
            assert_eq!(bb.get(unit), Some(hours));
        }
    }

    #[test]
    fn test_plan_idempotent() {
        let units = vec![Unit::new("Math", 8), Unit::new("History", 2)];
        let first = plan(&units, &windows()).unwrap();
        for _ in 0..5 {
            assert_eq!(plan(&units, &windows()).unwrap(), first);
        }
    }

    #[test]
    fn test_plan_no_units() {
        let err = plan(&[], &windows()).unwrap_err();
        assert!(matches!(err, TimetableError::InsufficientInput(_)));
    }

    #[test]
    fn test_plan_no_capacity() {
        let units = vec![Unit::new("Math", 8)];
        assert!(matches!(
            plan(&units, &[]).unwrap_err(),
            TimetableError::InsufficientInput(_)
        ));

        // Only sub-hour windows
        let short = vec![Window::parse(Day::Tue, "08:00", "08:45").unwrap()];
        assert!(matches!(
            plan(&units, &short).unwrap_err(),
            TimetableError::InsufficientInput(_)
        ));
    }

    #[test]
    fn test_plan_duplicate_unit() {
        let units = vec![Unit::new("Math", 8), Unit::new("Math", 2)];
        assert_eq!(
            plan(&units, &windows()).unwrap_err(),
            TimetableError::DuplicateUnit {
                name: "Math".into()
            }
        );
    }

    #[test]
    fn test_plan_degenerate_weight() {
        let units = vec![Unit::new("Math", 0), Unit::new("Art", 0)];
        assert_eq!(
            plan(&units, &windows()).unwrap_err(),
            TimetableError::DegenerateWeight
        );
    }
}
