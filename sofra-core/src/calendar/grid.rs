//! Month grid and week window generation.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;

/// One cell of a month grid or week strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    /// False for the filler days borrowed from the adjacent months
    pub is_in_current_month: bool,
}

/// Month grid for the month containing `anchor`, weeks starting on Monday.
pub fn month_grid(anchor: NaiveDate) -> Vec<Day> {
    month_grid_from(anchor, Weekday::Mon)
}

/// Month grid for the month containing `anchor`.
///
/// The grid is left-padded with the trailing days of the previous month so
/// that the first cell falls on `week_start`, and right-padded with the
/// leading days of the next month so its length is a multiple of 7.
pub fn month_grid_from(anchor: NaiveDate, week_start: Weekday) -> Vec<Day> {
    let first = first_of_month(anchor);
    let days_in_month = first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .count();

    let leading = days_since(first.weekday(), week_start);
    let trailing = (7 - (leading + days_in_month) % 7) % 7;
    let grid_start = first - Duration::days(leading as i64);

    grid_start
        .iter_days()
        .take(leading + days_in_month + trailing)
        .map(|date| Day {
            date,
            is_in_current_month: date.month() == first.month(),
        })
        .collect()
}

/// The seven consecutive days starting from the Monday on or before `anchor`.
pub fn week_days(anchor: NaiveDate) -> [Day; 7] {
    let monday = anchor - Duration::days(days_since(anchor.weekday(), Weekday::Mon) as i64);

    std::array::from_fn(|offset| {
        let date = monday + Duration::days(offset as i64);
        Day {
            date,
            is_in_current_month: date.month() == anchor.month(),
        }
    })
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Number of days from `week_start` forward to `weekday` (0..=6).
fn days_since(weekday: Weekday, week_start: Weekday) -> usize {
    ((weekday.num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7) as usize
}
