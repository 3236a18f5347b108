//! Date and calendar arithmetic.
//!
//! Everything here is pure: callers pass the reference date (or "now") in,
//! which keeps the month grid, week view and countdown testable without a
//! clock. Calendar days are `NaiveDate`s and never carry a time zone.

mod clock_time;
mod countdown;
mod grid;

pub use clock_time::ClockTime;
pub(crate) use clock_time::deserialize_optional_clock_time;
pub use countdown::{Countdown, countdown, now_in};
pub use grid::{Day, month_grid, month_grid_from, week_days};

use chrono::{DateTime, NaiveDate, TimeZone};

/// The calendar day of an instant, read in the instant's own offset.
///
/// Both sides of every day comparison go through `NaiveDate`, so an instant
/// late in the evening never slides into the next (or previous) UTC day.
pub fn calendar_day_of<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Utc};

    #[test]
    fn test_calendar_day_uses_local_offset() {
        let berlin_winter = FixedOffset::east_opt(3600).unwrap();
        let late_evening = berlin_winter
            .with_ymd_and_hms(2026, 3, 1, 23, 30, 0)
            .unwrap();

        assert_eq!(
            calendar_day_of(&late_evening),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
        // Same instant in UTC is still March 1st, 22:30
        assert_eq!(
            calendar_day_of(&late_evening.with_timezone(&Utc)),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_calendar_day_just_after_midnight() {
        let istanbul = FixedOffset::east_opt(3 * 3600).unwrap();
        let after_midnight = istanbul.with_ymd_and_hms(2026, 3, 2, 0, 15, 0).unwrap();

        assert_eq!(
            calendar_day_of(&after_midnight),
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
        );
    }
}
