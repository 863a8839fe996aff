//! Slot packer.
//!
//! Walks availability windows day by day and greedily carves unit sessions
//! out of each window until the window or the budget runs out.
//!
//! # Algorithm
//!
//! `SlotPacker` groups windows by day (first-seen day order, caller's window
//! order within a day). For every window it keeps a cursor at the window
//! start and a capacity in whole hours, then repeatedly:
//!
//! 1. Selects a unit according to the [`SelectionPolicy`].
//! 2. Grants `min(step, remaining budget, remaining capacity)` hours.
//! 3. Emits a session at the cursor and advances the cursor.
//!
//! There is no backtracking: budget that does not fit is carried to the
//! next window, and whatever is left after the last window stays unscheduled.
//!
//! # Complexity
//! O(w * u) grants for w windows and u units.

mod policy;
mod slot;

pub use policy::{PackerConfig, SelectionPolicy};
pub use slot::SlotPacker;
