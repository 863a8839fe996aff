//! Timetable quality metrics (KPIs).
//!
//! Compares what was planned with what was actually scheduled.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Available hours | Σ bookable window hours |
//! | Budgeted hours | Σ planned unit budgets |
//! | Scheduled hours | Σ session hours |
//! | Utilization | scheduled / available |
//! | Leftover | budgeted − scheduled, per unit |

use std::collections::HashMap;

use crate::models::{total_hours, Budget, Timetable, Window};

/// Timetable performance indicators. All values are in whole hours.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Bookable hours across all windows.
    pub available_hours: u32,
    /// Hours planned across all units.
    pub budgeted_hours: u32,
    /// Hours actually scheduled.
    pub scheduled_hours: u32,
    /// Fraction of available hours scheduled (0.0..1.0).
    pub utilization: f64,
    /// Scheduled hours per unit.
    pub scheduled_by_unit: HashMap<String, u32>,
    /// Planned but unscheduled hours per unit.
    pub leftover_by_unit: HashMap<String, u32>,
    /// Units with a positive budget that received no session.
    pub starved_units: Vec<String>,
}

impl TimetableKpi {
    /// Computes KPIs from the planned budget and the packed timetable.
    ///
    /// # Arguments
    /// * `planned` - Budget as produced by the planner, before packing.
    /// * `timetable` - The packed timetable.
    /// * `windows` - The windows the timetable was packed into.
    pub fn calculate(planned: &Budget, timetable: &Timetable, windows: &[Window]) -> Self {
        let available_hours = total_hours(windows);
        let scheduled_hours = timetable.total_hours();

        let mut scheduled_by_unit = HashMap::with_capacity(planned.len());
        let mut leftover_by_unit = HashMap::with_capacity(planned.len());
        let mut starved_units = Vec::new();

        for (unit, budget) in planned.iter() {
            let scheduled = timetable.hours_for_unit(unit);
            if budget > 0 && scheduled == 0 {
                starved_units.push(unit.to_string());
            }
            scheduled_by_unit.insert(unit.to_string(), scheduled);
            leftover_by_unit.insert(unit.to_string(), budget.saturating_sub(scheduled));
        }

        let utilization = if available_hours == 0 {
            0.0
        } else {
            f64::from(scheduled_hours) / f64::from(available_hours)
        };

        Self {
            available_hours,
            budgeted_hours: planned.total_hours(),
            scheduled_hours,
            utilization,
            scheduled_by_unit,
            leftover_by_unit,
            starved_units,
        }
    }

    /// Total planned hours that were not scheduled.
    pub fn leftover_hours(&self) -> u32 {
        self.leftover_by_unit.values().sum()
    }

    /// Whether every planned hour was scheduled.
    pub fn fully_scheduled(&self) -> bool {
        self.leftover_hours() == 0
    }
}
