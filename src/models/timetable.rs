//! Timetable (solution) model.
//!
//! A timetable is the day-keyed collection of sessions produced by one
//! allocation run. Days keep the order in which they were first seen in
//! the availability windows; sessions within a day are in start-time order
//! because the packer advances a cursor through each window.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::window::hhmm;
use super::Day;

/// One scheduled `(unit, day, start, end)` assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Scheduled unit name.
    pub unit: String,
    /// Day of the session.
    pub day: Day,
    /// Start time (inclusive).
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// End time (exclusive).
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl Session {
    /// Creates a new session.
    pub fn new(unit: impl Into<String>, day: Day, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            unit: unit.into(),
            day,
            start,
            end,
        }
    }

    /// Session length in whole hours.
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        u32::try_from((self.end - self.start).num_hours()).unwrap_or(0)
    }

    /// Whether two sessions on the same day overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Session {
    /// Formats as `"{unit} ({start}-{end})"` with `HH:MM` times.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}-{})",
            self.unit,
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Sessions of a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Day,
    pub sessions: Vec<Session>,
}

/// Day-keyed, ordered collection of sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    days: Vec<DaySchedule>,
}

impl Timetable {
    /// Creates an empty timetable (no days).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a day with no sessions, keeping its first-seen position.
    pub fn add_day(&mut self, day: Day) {
        self.day_mut(day);
    }

    /// Appends a session to its day, registering the day if needed.
    pub fn add_session(&mut self, session: Session) {
        self.day_mut(session.day).sessions.push(session);
    }

    fn day_mut(&mut self, day: Day) -> &mut DaySchedule {
        let idx = match self.days.iter().position(|d| d.day == day) {
            Some(idx) => idx,
            None => {
                self.days.push(DaySchedule {
                    day,
                    sessions: Vec::new(),
                });
                self.days.len() - 1
            }
        };
        &mut self.days[idx]
    }

    /// Sessions for a day, or `None` if the day is not a key.
    pub fn get(&self, day: Day) -> Option<&[Session]> {
        self.days
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.sessions.as_slice())
    }

    /// Whether the day is a key (it may still have no sessions).
    pub fn contains_day(&self, day: Day) -> bool {
        self.days.iter().any(|d| d.day == day)
    }

    /// Days in first-seen order.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days.iter().map(|d| d.day)
    }

    /// Per-day schedules in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &DaySchedule> {
        self.days.iter()
    }

    /// All sessions, day by day.
    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.days.iter().flat_map(|d| d.sessions.iter())
    }

    /// Whether the timetable has no days at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of sessions across all days.
    pub fn session_count(&self) -> usize {
        self.days.iter().map(|d| d.sessions.len()).sum()
    }

    /// Hours granted to a unit across all days.
    pub fn hours_for_unit(&self, unit: &str) -> u32 {
        self.sessions()
            .filter(|s| s.unit == unit)
            .map(Session::duration_hours)
            .sum()
    }

    /// Hours granted across all sessions.
    pub fn total_hours(&self) -> u32 {
        self.sessions().map(Session::duration_hours).sum()
    }
}
