//! Text rendering and reminder computation for a packed timetable.
//!
//! The rendered form has one section per day and one line per session,
//! `"{unit} ({start}-{end})"`. Reminders fire a fixed offset before each
//! session starts on its actual calendar date in a given week.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{Day, Timetable};

/// Default reminder lead time in minutes.
pub const DEFAULT_REMINDER_OFFSET_MINUTES: i64 = 15;

/// Renders the timetable as plain text.
///
/// ```text
/// Monday
///   Math (08:00-10:00)
///   History (13:00-14:00)
/// Saturday
///   (no sessions)
/// ```
pub fn render_text(timetable: &Timetable) -> String {
    let mut out = String::new();
    for day in timetable.iter() {
        out.push_str(&format!("{}\n", day.day.display_name()));
        if day.sessions.is_empty() {
            out.push_str("  (no sessions)\n");
        }
        for session in &day.sessions {
            out.push_str(&format!("  {session}\n"));
        }
    }
    out
}

/// A reminder for one scheduled session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub unit: String,
    pub day: Day,
    pub session_start: NaiveDateTime,
    pub remind_at: NaiveDateTime,
}

/// Monday of the week containing `date`.
pub fn week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Computes reminders for every session in the week containing `week_start`.
///
/// Each session is placed on the date of its weekday within that week and
/// its reminder fires `offset` before the session starts. Reminders are
/// returned in timetable order.
pub fn reminders(timetable: &Timetable, week_start: NaiveDate, offset: Duration) -> Vec<Reminder> {
    let monday = week_monday(week_start);
    timetable
        .sessions()
        .map(|session| {
            let date = monday + Duration::days(i64::from(session.day.days_from_monday()));
            let session_start = date.and_time(session.start);
            Reminder {
                unit: session.unit.clone(),
                day: session.day,
                session_start,
                remind_at: session_start - offset,
            }
        })
        .collect()
}

/// Formats a reminder instant as `YYYY-MM-DD HH:MM`.
pub fn format_instant(instant: NaiveDateTime) -> String {
    instant.format("%Y-%m-%d %H:%M").to_string()
}

/// Formats a time of day as `HH:MM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_timetable() -> Timetable {
        let mut tt = Timetable::new();
        tt.add_session(Session::new("Math", Day::Mon, t(8, 0), t(10, 0)));
        tt.add_session(Session::new("History", Day::Mon, t(13, 0), t(14, 0)));
        tt.add_day(Day::Sat);
        tt.add_session(Session::new("Art", Day::Wed, t(0, 0), t(1, 0)));
        tt
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_timetable());
        assert_eq!(
            text,
            "Monday\n  Math (08:00-10:00)\n  History (13:00-14:00)\nSaturday\n  (no sessions)\nWednesday\n  Art (00:00-01:00)\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_text(&Timetable::new()), "");
    }

    #[test]
    fn test_week_monday() {
        // 2025-01-08 is a Wednesday
        assert_eq!(week_monday(date(2025, 1, 8)), date(2025, 1, 6));
        assert_eq!(week_monday(date(2025, 1, 6)), date(2025, 1, 6));
        assert_eq!(week_monday(date(2025, 1, 12)), date(2025, 1, 6)); // Sunday
    }

    #[test]
    fn test_reminders_default_offset() {
        let tt = sample_timetable();
        let rs = reminders(
            &tt,
            date(2025, 1, 8),
            Duration::minutes(DEFAULT_REMINDER_OFFSET_MINUTES),
        );

        assert_eq!(rs.len(), 3);
        assert_eq!(rs[0].unit, "Math");
        assert_eq!(format_instant(rs[0].remind_at), "2025-01-06 07:45");
        assert_eq!(format_instant(rs[1].session_start), "2025-01-06 13:00");

        // Midnight session: reminder falls on the previous evening
        assert_eq!(rs[2].day, Day::Wed);
        assert_eq!(format_instant(rs[2].remind_at), "2025-01-07 23:45");
    }

    #[test]
    fn test_reminders_custom_offset() {
        let rs = reminders(&sample_timetable(), date(2025, 1, 6), Duration::hours(1));
        assert_eq!(format_instant(rs[1].remind_at), "2025-01-06 12:00");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(t(9, 5)), "09:05");
    }
}
