//! Window-by-window slot packer.

use chrono::{Duration, NaiveTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::{PackerConfig, SelectionPolicy};
use crate::models::{Budget, Day, Session, Timetable, Window};

/// Packs budgeted unit-hours into availability windows.
///
/// The budget is consumed in place: after packing, it holds the hours that
/// could not be scheduled.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Budget, Day, Window};
/// use u_timetable::packer::SlotPacker;
///
/// let mut budget = Budget::new().with("Math", 2).with("History", 1);
/// let windows = vec![
///     Window::parse(Day::Mon, "08:00", "10:00").unwrap(),
///     Window::parse(Day::Mon, "13:00", "14:00").unwrap(),
/// ];
///
/// let timetable = SlotPacker::new().pack(&mut budget, &windows);
/// assert_eq!(timetable.hours_for_unit("Math"), 2);
/// assert_eq!(timetable.hours_for_unit("History"), 1);
/// assert!(budget.is_exhausted());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotPacker {
    config: PackerConfig,
}

/// Cursor state of the window being filled.
struct WindowCursor {
    day: Day,
    cursor: NaiveTime,
    capacity: u32,
}

impl SlotPacker {
    /// Creates a packer with the default (greedy) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a packer from a configuration.
    pub fn with_config(config: PackerConfig) -> Self {
        Self { config }
    }

    /// Sets the selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Sets the largest randomized grant.
    pub fn with_max_step(mut self, hours: u32) -> Self {
        self.config.max_step_hours = hours;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &PackerConfig {
        &self.config
    }

    /// Packs the budget into the windows.
    ///
    /// Uses the configured seed when present, otherwise thread-local entropy.
    pub fn pack(&self, budget: &mut Budget, windows: &[Window]) -> Timetable {
        match self.config.seed {
            Some(seed) => self.pack_with_rng(budget, windows, &mut StdRng::seed_from_u64(seed)),
            None => self.pack_with_rng(budget, windows, &mut rand::rng()),
        }
    }

    /// Packs the budget into the windows using the given randomness source.
    ///
    /// The greedy policy never draws from `rng`.
    ///
    /// Returns an empty timetable (no days) if the budget has no positive
    /// entry. Otherwise every day owning a window is present, even when
    /// nothing was granted on it.
    pub fn pack_with_rng<R: Rng>(
        &self,
        budget: &mut Budget,
        windows: &[Window],
        rng: &mut R,
    ) -> Timetable {
        let mut timetable = Timetable::new();
        if budget.is_exhausted() {
            debug!("no demand, returning empty timetable");
            return timetable;
        }

        for (day, day_windows) in group_by_day(windows) {
            timetable.add_day(day);
            for window in day_windows {
                let mut state = WindowCursor {
                    day,
                    cursor: window.start,
                    capacity: window.duration_hours(),
                };
                match self.config.policy {
                    SelectionPolicy::Greedy => {
                        self.fill_greedy(budget, &mut state, &mut timetable)
                    }
                    SelectionPolicy::Randomized => {
                        self.fill_randomized(budget, &mut state, &mut timetable, rng)
                    }
                }
                debug!(
                    %day,
                    start = %window.start,
                    end = %window.end,
                    unused = state.capacity,
                    "window packed"
                );
            }
        }

        if !budget.is_exhausted() {
            info!(
                leftover = budget.total_hours(),
                "budget left unscheduled after last window"
            );
        }

        timetable
    }

    /// Largest-remaining-first until the window or the budget is exhausted.
    fn fill_greedy(&self, budget: &mut Budget, state: &mut WindowCursor, timetable: &mut Timetable) {
        while state.capacity > 0 {
            let Some(idx) = largest_remaining(budget) else {
                break;
            };
            let hours = budget.hours_at(idx).min(state.capacity);
            grant(budget, idx, hours, state, timetable);
        }
    }

    /// One pass over a fresh shuffle of the units with remaining budget.
    fn fill_randomized<R: Rng>(
        &self,
        budget: &mut Budget,
        state: &mut WindowCursor,
        timetable: &mut Timetable,
        rng: &mut R,
    ) {
        let mut order: Vec<usize> = (0..budget.len())
            .filter(|&idx| budget.hours_at(idx) > 0)
            .collect();
        order.shuffle(rng);

        let max_step = self.config.effective_max_step();
        for idx in order {
            if state.capacity == 0 {
                break;
            }
            let remaining = budget.hours_at(idx);
            if remaining == 0 {
                continue;
            }
            let step = rng.random_range(1..=max_step);
            let hours = step.min(remaining).min(state.capacity);
            grant(budget, idx, hours, state, timetable);
        }
    }
}

/// Emits one session at the cursor and updates budget and capacity.
fn grant(
    budget: &mut Budget,
    idx: usize,
    hours: u32,
    state: &mut WindowCursor,
    timetable: &mut Timetable,
) {
    let start = state.cursor;
    let end = start + Duration::hours(i64::from(hours));
    let session = Session::new(budget.unit_at(idx), state.day, start, end);
    trace!(unit = %session.unit, day = %state.day, %start, %end, "granted");

    timetable.add_session(session);
    budget.consume_at(idx, hours);
    state.cursor = end;
    state.capacity -= hours;
}

/// Index of the strictly largest positive budget; ties keep the first.
fn largest_remaining(budget: &Budget) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (idx, (_, hours)) in budget.iter().enumerate() {
        let better = match best {
            Some((_, top)) => hours > top,
            None => hours > 0,
        };
        if better {
            best = Some((idx, hours));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Groups windows by day, keeping first-seen day order and caller order within a day.
fn group_by_day(windows: &[Window]) -> Vec<(Day, Vec<&Window>)> {
    let mut groups: Vec<(Day, Vec<&Window>)> = Vec::new();
    for window in windows {
        match groups.iter_mut().find(|(day, _)| *day == window.day) {
            Some((_, list)) => list.push(window),
            None => groups.push((window.day, vec![window])),
        }
    }
    groups
}
