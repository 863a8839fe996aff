//! One-call timetable generation: plan, then pack.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AllocationConfig;
use crate::error::Result;
use crate::models::{Block, BlockAvailability, Budget, Day, Timetable, Unit, Window};
use crate::packer::SlotPacker;
use crate::planner;

/// Input container for one allocation run.
///
/// Availability may be given as explicit windows, as named blocks, or both.
/// Explicit windows come first in processing order, followed by blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Units competing for time.
    pub units: Vec<Unit>,
    /// Explicit availability windows.
    #[serde(default)]
    pub windows: Vec<Window>,
    /// Availability given as named blocks.
    #[serde(default)]
    pub blocks: Vec<BlockAvailability>,
}

impl AllocationRequest {
    /// Creates a request from units and windows.
    pub fn new(units: Vec<Unit>, windows: Vec<Window>) -> Self {
        Self {
            units,
            windows,
            blocks: Vec::new(),
        }
    }

    /// Adds a unit.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    /// Adds a window.
    pub fn with_window(mut self, window: Window) -> Self {
        self.windows.push(window);
        self
    }

    /// Adds a block of availability.
    pub fn with_block(mut self, day: Day, block: Block, hours: u32) -> Self {
        self.blocks.push(BlockAvailability::new(day, block, hours));
        self
    }

    /// All windows in processing order, blocks expanded.
    ///
    /// Explicit windows are re-checked, since their fields are public and
    /// may have been set without [`Window::new`].
    pub fn resolved_windows(&self) -> Result<Vec<Window>> {
        let mut windows = Vec::with_capacity(self.windows.len() + self.blocks.len());
        for window in &self.windows {
            windows.push(Window::new(window.day, window.start, window.end)?);
        }
        for entry in &self.blocks {
            windows.push(entry.to_window()?);
        }
        Ok(windows)
    }
}

/// Result of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Budget as planned, before packing.
    pub budget: Budget,
    /// Hours that could not be scheduled.
    pub leftover: Budget,
    /// Scheduled sessions by day.
    pub timetable: Timetable,
}

impl Allocation {
    /// Whether every planned hour was scheduled.
    pub fn is_fully_scheduled(&self) -> bool {
        self.leftover.is_exhausted()
    }
}

/// Runs the planner and the packer in sequence.
///
/// Holds no state between runs; each call owns its own budget.
///
/// # Example
///
/// ```
/// use u_timetable::generator::{AllocationRequest, TimetableGenerator};
/// use u_timetable::models::{Block, Day, Unit};
///
/// let request = AllocationRequest::default()
///     .with_unit(Unit::new("Math", 8))
///     .with_unit(Unit::new("History", 2))
///     .with_block(Day::Mon, Block::Morning, 2)
///     .with_block(Day::Mon, Block::Afternoon, 1);
///
/// let allocation = TimetableGenerator::new().generate(&request).unwrap();
/// assert_eq!(allocation.timetable.hours_for_unit("Math"), 2);
/// assert!(allocation.is_fully_scheduled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    config: AllocationConfig,
}

impl TimetableGenerator {
    /// Creates a generator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator from a configuration.
    pub fn with_config(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Plans and packs a request.
    pub fn generate(&self, request: &AllocationRequest) -> Result<Allocation> {
        let windows = request.resolved_windows()?;
        self.allocate(&request.units, &windows)
    }

    /// Plans and packs units into already resolved windows.
    pub fn allocate(&self, units: &[Unit], windows: &[Window]) -> Result<Allocation> {
        let budget = planner::plan(units, windows)?;
        let mut leftover = budget.clone();
        let timetable = self.packer().pack(&mut leftover, windows);
        Ok(self.finish(budget, leftover, timetable))
    }

    /// Plans and packs a request with an explicit randomness source.
    pub fn generate_with_rng<R: Rng>(
        &self,
        request: &AllocationRequest,
        rng: &mut R,
    ) -> Result<Allocation> {
        let windows = request.resolved_windows()?;
        let budget = planner::plan(&request.units, &windows)?;
        let mut leftover = budget.clone();
        let timetable = self.packer().pack_with_rng(&mut leftover, &windows, rng);
        Ok(self.finish(budget, leftover, timetable))
    }

    fn packer(&self) -> SlotPacker {
        SlotPacker::with_config(self.config.packer_config())
    }

    fn finish(&self, budget: Budget, leftover: Budget, timetable: Timetable) -> Allocation {
        info!(
            policy = %self.config.policy,
            sessions = timetable.session_count(),
            scheduled = timetable.total_hours(),
            leftover = leftover.total_hours(),
            "timetable generated"
        );
        Allocation {
            budget,
            leftover,
            timetable,
        }
    }
}
