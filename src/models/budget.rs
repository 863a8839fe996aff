//! Budget model.
//!
//! A budget maps each unit name to its remaining hours. It is created once
//! per allocation run by the planner and consumed in place by the packer.
//! Entries keep insertion order so tie-breaking by first-seen unit is
//! deterministic.

use serde::{Deserialize, Serialize};

/// Remaining hours for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// Unit name.
    pub unit: String,
    /// Hours still to be granted.
    pub hours: u32,
}

/// Ordered mapping `unit name -> remaining hours`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget {
    entries: Vec<BudgetEntry>,
}

impl Budget {
    /// Creates an empty budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hours for a unit, appending it if new.
    pub fn set(&mut self, unit: impl Into<String>, hours: u32) {
        let unit = unit.into();
        match self.entries.iter_mut().find(|e| e.unit == unit) {
            Some(entry) => entry.hours = hours,
            None => self.entries.push(BudgetEntry { unit, hours }),
        }
    }

    /// Builder form of [`Budget::set`].
    pub fn with(mut self, unit: impl Into<String>, hours: u32) -> Self {
        self.set(unit, hours);
        self
    }

    /// Remaining hours for a unit.
    pub fn get(&self, unit: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.unit == unit).map(|e| e.hours)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    /// Iterates `(unit, hours)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|e| (e.unit.as_str(), e.hours))
    }

    /// Sum of remaining hours.
    pub fn total_hours(&self) -> u32 {
        self.entries.iter().map(|e| e.hours).sum()
    }

    /// Whether no unit has hours left (also true when empty).
    pub fn is_exhausted(&self) -> bool {
        self.entries.iter().all(|e| e.hours == 0)
    }

    /// Number of units.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the budget has no units.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remaining hours at an entry index.
    #[inline]
    pub(crate) fn hours_at(&self, idx: usize) -> u32 {
        self.entries[idx].hours
    }

    /// Unit name at an entry index.
    #[inline]
    pub(crate) fn unit_at(&self, idx: usize) -> &str {
        &self.entries[idx].unit
    }

    /// Deducts granted hours from an entry, saturating at zero.
    #[inline]
    pub(crate) fn consume_at(&mut self, idx: usize, hours: u32) {
        let entry = &mut self.entries[idx];
        entry.hours = entry.hours.saturating_sub(hours);
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Budget {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut budget = Budget::new();
        for (unit, hours) in iter {
            budget.set(unit, hours);
        }
        budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_set_and_get() {
        let mut b = Budget::new().with("Math", 2).with("History", 1);
        assert_eq!(b.get("Math"), Some(2));
        assert_eq!(b.get("Art"), None);
        assert_eq!(b.total_hours(), 3);

        b.set("Math", 5);
        assert_eq!(b.len(), 2);
        assert_eq!(b.get("Math"), Some(5));
    }

    #[test]
    fn test_budget_keeps_insertion_order() {
        let b: Budget = [("c", 1), ("a", 2), ("b", 3)].into_iter().collect();
        let order: Vec<&str> = b.iter().map(|(u, _)| u).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_budget_exhausted() {
        assert!(Budget::new().is_exhausted());
        let mut b = Budget::new().with("Math", 1).with("Art", 0);
        assert!(!b.is_exhausted());
        b.consume_at(0, 3);
        assert_eq!(b.hours_at(0), 0);
        assert!(b.is_exhausted());
    }

    #[test]
    fn test_budget_serializes_as_list() {
        let b = Budget::new().with("Math", 2);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"[{"unit":"Math","hours":2}]"#);
    }
}
