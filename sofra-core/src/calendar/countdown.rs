//! Countdown to the next daily boundary (iftar at sunset, sahur at dawn).

use std::fmt;

use chrono::{Duration, NaiveDateTime, Utc};
use serde::Serialize;

use crate::calendar::ClockTime;
use crate::model::Country;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    /// True when counting down to boundary A (today), false for boundary B (tomorrow)
    pub target_is_a: bool,
    pub target: NaiveDateTime,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Time left until the next boundary.
///
/// Before today's `boundary_a` the target is today's A; from A onwards
/// (inclusive) the target is tomorrow's `boundary_b`. The duration is never
/// negative.
pub fn countdown(now: NaiveDateTime, boundary_a: ClockTime, boundary_b: ClockTime) -> Countdown {
    let today = now.date();
    let today_a = today.and_time(boundary_a.to_naive_time());

    let (target_is_a, target) = if now < today_a {
        (true, today_a)
    } else {
        let tomorrow = today + Duration::days(1);
        (false, tomorrow.and_time(boundary_b.to_naive_time()))
    };

    let remaining = u64::try_from((target - now).num_seconds()).unwrap_or(0);

    Countdown {
        target_is_a,
        target,
        hours: remaining / 3600,
        minutes: remaining % 3600 / 60,
        seconds: remaining % 60,
    }
}

/// Current wall-clock time in the country's time zone.
pub fn now_in(country: Country) -> NaiveDateTime {
    Utc::now().with_timezone(&country.time_zone()).naive_local()
}
