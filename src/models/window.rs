//! Day and availability window models.
//!
//! A window is one contiguous bookable interval `[start, end)` on a single
//! weekday. Only whole hours are bookable: a window's duration truncates to
//! whole hours, so a 90-minute window offers one hour and a 40-minute window
//! offers none.
//!
//! # Blocks
//! Availability is often entered as named blocks of the day with a number
//! of hours. Each block has a fixed start time:
//!
//! | Block | Start |
//! |-------|-------|
//! | Morning | 08:00 |
//! | Afternoon | 13:00 |
//! | Evening | 18:00 |

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days, Monday first.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Short lowercase code (`"mon"`).
    pub fn code(self) -> &'static str {
        match self {
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thu => "thu",
            Day::Fri => "fri",
            Day::Sat => "sat",
            Day::Sun => "sun",
        }
    }

    /// Full display name (`"Monday"`).
    pub fn display_name(self) -> &'static str {
        match self {
            Day::Mon => "Monday",
            Day::Tue => "Tuesday",
            Day::Wed => "Wednesday",
            Day::Thu => "Thursday",
            Day::Fri => "Friday",
            Day::Sat => "Saturday",
            Day::Sun => "Sunday",
        }
    }

    /// Days elapsed since Monday (Monday = 0).
    pub fn days_from_monday(self) -> u32 {
        self.to_weekday().num_days_from_monday()
    }

    /// The matching chrono weekday.
    pub fn to_weekday(self) -> Weekday {
        match self {
            Day::Mon => Weekday::Mon,
            Day::Tue => Weekday::Tue,
            Day::Wed => Weekday::Wed,
            Day::Thu => Weekday::Thu,
            Day::Fri => Weekday::Fri,
            Day::Sat => Weekday::Sat,
            Day::Sun => Weekday::Sun,
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Mon,
            Weekday::Tue => Day::Tue,
            Weekday::Wed => Day::Wed,
            Weekday::Thu => Day::Thu,
            Weekday::Fri => Day::Fri,
            Weekday::Sat => Day::Sat,
            Weekday::Sun => Day::Sun,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a day name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDayError(pub String);

impl fmt::Display for ParseDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown day: {}", self.0)
    }
}

impl std::error::Error for ParseDayError {}

impl FromStr for Day {
    type Err = ParseDayError;

    /// Accepts short codes and full names, case-insensitive.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Day::ALL
            .into_iter()
            .find(|d| lower == d.code() || lower == d.display_name().to_ascii_lowercase())
            .ok_or_else(|| ParseDayError(s.to_string()))
    }
}

/// Named block of the day with a fixed start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    Morning,
    Afternoon,
    Evening,
}

impl Block {
    /// Fixed start time of the block.
    pub fn start_time(self) -> NaiveTime {
        let hour = match self {
            Block::Morning => 8,
            Block::Afternoon => 13,
            Block::Evening => 18,
        };
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }
}

/// A contiguous availability interval `[start, end)` on one day.
///
/// Deserialization goes through [`Window::new`], so `start < end` holds for
/// every window read from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct Window {
    /// Day the window belongs to.
    pub day: Day,
    /// Interval start (inclusive).
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    /// Interval end (exclusive).
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

/// Unchecked wire form of a [`Window`].
#[derive(Deserialize)]
struct RawWindow {
    day: Day,
    #[serde(with = "hhmm")]
    start: NaiveTime,
    #[serde(with = "hhmm")]
    end: NaiveTime,
}

impl TryFrom<RawWindow> for Window {
    type Error = TimetableError;

    fn try_from(raw: RawWindow) -> Result<Self> {
        Window::new(raw.day, raw.start, raw.end)
    }
}

impl Window {
    /// Creates a window, rejecting `start >= end`.
    pub fn new(day: Day, start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(TimetableError::InvalidWindow { day, start, end });
        }
        Ok(Self { day, start, end })
    }

    /// Creates a window from `"HH:MM"` strings.
    pub fn parse(day: Day, start: &str, end: &str) -> Result<Self> {
        Self::new(day, hhmm::parse(start)?, hhmm::parse(end)?)
    }

    /// Creates the window covering `hours` from the block's start time.
    ///
    /// Fails if `hours` is zero or the window would reach or pass midnight,
    /// since a time of day cannot express an end of 24:00.
    pub fn from_block(day: Day, block: Block, hours: u32) -> Result<Self> {
        let start = block.start_time();
        let (end, wrapped) = start.overflowing_add_signed(Duration::hours(i64::from(hours)));
        if wrapped != 0 || hours == 0 {
            return Err(TimetableError::InvalidWindow { day, start, end });
        }
        Self::new(day, start, end)
    }

    /// Bookable whole hours. Partial hours are truncated.
    #[inline]
    pub fn duration_hours(&self) -> u32 {
        u32::try_from((self.end - self.start).num_hours()).unwrap_or(0)
    }

    /// Whether the window offers at least one whole hour.
    #[inline]
    pub fn is_bookable(&self) -> bool {
        self.duration_hours() > 0
    }

    /// Whether a time of day falls within this window.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows on the same day overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

/// Availability entered as a named block with a number of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockAvailability {
    pub day: Day,
    pub block: Block,
    pub hours: u32,
}

impl BlockAvailability {
    /// Creates a block availability entry.
    pub fn new(day: Day, block: Block, hours: u32) -> Self {
        Self { day, block, hours }
    }

    /// The window this block covers.
    pub fn to_window(&self) -> Result<Window> {
        Window::from_block(self.day, self.block, self.hours)
    }
}

/// Total bookable hours across windows.
pub fn total_hours(windows: &[Window]) -> u32 {
    windows.iter().map(Window::duration_hours).sum()
}

/// Serde helpers for `"HH:MM"` times of day.
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::error::{Result, TimetableError};

    const FORMAT: &str = "%H:%M";

    pub fn parse(s: &str) -> Result<NaiveTime> {
        NaiveTime::parse_from_str(s.trim(), FORMAT)
            .map_err(|_| TimetableError::InvalidTime(s.to_string()))
    }

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_window_duration_truncates() {
        let w = Window::new(Day::Mon, t(8, 0), t(10, 0)).unwrap();
        assert_eq!(w.duration_hours(), 2);

        let w = Window::new(Day::Mon, t(8, 0), t(9, 30)).unwrap();
        assert_eq!(w.duration_hours(), 1);

        let w = Window::new(Day::Mon, t(8, 0), t(8, 45)).unwrap();
        assert_eq!(w.duration_hours(), 0);
        assert!(!w.is_bookable());
    }

    #[test]
    fn test_window_rejects_inverted() {
        let err = Window::new(Day::Fri, t(10, 0), t(9, 0)).unwrap_err();
        assert!(matches!(err, TimetableError::InvalidWindow { day: Day::Fri, .. }));
        assert!(Window::new(Day::Fri, t(9, 0), t(9, 0)).is_err());
    }

    #[test]
    fn test_window_contains() {
        let w = Window::parse(Day::Tue, "13:00", "15:00").unwrap();
        assert!(w.contains(t(13, 0)));
        assert!(w.contains(t(14, 59)));
        assert!(!w.contains(t(15, 0))); // exclusive end
    }

    #[test]
    fn test_window_deserialize_rejects_inverted() {
        let err = serde_json::from_str::<Window>(r#"{"day":"mon","start":"12:00","end":"09:00"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid window on mon"));

        assert!(
            serde_json::from_str::<Window>(r#"{"day":"mon","start":"09:00","end":"09:00"}"#)
                .is_err()
        );
    }

    #[test]
    fn test_window_overlap() {
        let a = Window::parse(Day::Mon, "08:00", "10:00").unwrap();
        let b = Window::parse(Day::Mon, "09:00", "11:00").unwrap();
        let c = Window::parse(Day::Mon, "10:00", "11:00").unwrap();
        let d = Window::parse(Day::Tue, "08:00", "10:00").unwrap();
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c)); // touching but not overlapping
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_window_parse_invalid_time() {
        let err = Window::parse(Day::Tue, "25:00", "26:00").unwrap_err();
        assert_eq!(err, TimetableError::InvalidTime("25:00".into()));
    }

    #[test]
    fn test_from_block() {
        let w = Window::from_block(Day::Wed, Block::Afternoon, 3).unwrap();
        assert_eq!(w.start, t(13, 0));
        assert_eq!(w.end, t(16, 0));
        assert_eq!(w.duration_hours(), 3);

        assert!(Window::from_block(Day::Wed, Block::Evening, 0).is_err());
        let late = Window::from_block(Day::Wed, Block::Evening, 5).unwrap();
        assert_eq!(late.end, t(23, 0));
        assert!(Window::from_block(Day::Wed, Block::Evening, 6).is_err()); // ends at midnight
        assert!(Window::from_block(Day::Wed, Block::Evening, 7).is_err()); // past midnight
    }

    #[test]
    fn test_block_availability_serde() {
        let entry: BlockAvailability =
            serde_json::from_str(r#"{"day": "sat", "block": "morning", "hours": 2}"#).unwrap();
        assert_eq!(entry, BlockAvailability::new(Day::Sat, Block::Morning, 2));
        assert_eq!(entry.to_window().unwrap().end, t(10, 0));
    }

    #[test]
    fn test_total_hours() {
        let windows = vec![
            Window::parse(Day::Mon, "08:00", "10:00").unwrap(),
            Window::parse(Day::Mon, "13:00", "14:00").unwrap(),
            Window::parse(Day::Tue, "18:00", "18:30").unwrap(),
        ];
        assert_eq!(total_hours(&windows), 3);
    }

    #[test]
    fn test_day_parse() {
        assert_eq!("mon".parse::<Day>().unwrap(), Day::Mon);
        assert_eq!("Saturday".parse::<Day>().unwrap(), Day::Sat);
        assert_eq!(" SUN ".parse::<Day>().unwrap(), Day::Sun);
        assert!("someday".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_weekday_roundtrip() {
        for day in Day::ALL {
            assert_eq!(Day::from(day.to_weekday()), day);
        }
        assert_eq!(Day::Thu.days_from_monday(), 3);
    }

    #[test]
    fn test_window_serde_format() {
        let w = Window::parse(Day::Thu, "08:00", "10:30").unwrap();
        let json = serde_json::to_string(&w).unwrap();
        assert_eq!(json, r#"{"day":"thu","start":"08:00","end":"10:30"}"#);

        let back: Window = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w);
    }
}
