//! Timetable domain models.
//!
//! Provides the data types exchanged with the allocator: the demand side
//! (`Unit`), the supply side (`Day`, `Window`, `Block`), the per-run
//! `Budget`, and the resulting `Timetable` of `Session`s.
//!
//! # Domain Mappings
//!
//! | u-timetable | Study planner | Shift work |
//! |-------------|---------------|------------|
//! | Unit | Course/Subject | Task stream |
//! | Window | Free study block | Open shift slot |
//! | Session | Study session | Booked hours |

mod budget;
mod timetable;
mod unit;
pub(crate) mod window;

pub use budget::{Budget, BudgetEntry};
pub use timetable::{DaySchedule, Session, Timetable};
pub use unit::Unit;
pub use window::{total_hours, Block, BlockAvailability, Day, ParseDayError, Window};
