//! Weekly timetable allocation.
//!
//! Splits the hours of a week's availability windows between weighted
//! units and packs them into concrete sessions.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Unit`, `Day`, `Window`, `Block`,
//!   `Budget`, `Session`, `Timetable`
//! - **`planner`**: Difficulty-weighted hour budgets
//! - **`packer`**: Window-by-window session packing (greedy or randomized)
//! - **`generator`**: Plan and pack in one call
//! - **`validation`**: Input integrity checks (duplicate names, ranges, overlaps)
//! - **`kpi`**: Planned vs. scheduled metrics
//! - **`export`**: Text rendering and session reminders
//! - **`config`**: Serializable run configuration
//!
//! # Pipeline
//!
//! ```text
//! units + windows ──plan──▶ Budget ──pack──▶ Timetable
//! ```
//!
//! Each run is a pure function of its inputs (plus an injectable random
//! source for the randomized policy). Nothing is kept between runs.

pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod kpi;
pub mod models;
pub mod packer;
pub mod planner;
pub mod validation;

pub use config::AllocationConfig;
pub use error::{Result, TimetableError};
pub use generator::{Allocation, AllocationRequest, TimetableGenerator};
pub use planner::plan;
