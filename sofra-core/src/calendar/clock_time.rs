//! `HH:MM` times of day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SofraError, SofraResult};

/// A wall-clock time with minute precision, written as `HH:MM`.
///
/// Parsing tolerates a trailing annotation separated by whitespace, since
/// the prayer-time API sometimes answers with values like `"05:10 (CET)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> SofraResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(ClockTime)
            .ok_or_else(|| SofraError::InvalidClockTime(format!("{hour}:{minute}")))
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    pub fn to_naive_time(self) -> NaiveTime {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = SofraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.split_whitespace().next().unwrap_or_default();

        let (hour, minute) = value
            .split_once(':')
            .ok_or_else(|| SofraError::InvalidClockTime(s.to_string()))?;

        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 || !digits(hour) || !digits(minute) {
            return Err(SofraError::InvalidClockTime(s.to_string()));
        }

        let hour: u32 = hour
            .parse()
            .map_err(|_| SofraError::InvalidClockTime(s.to_string()))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| SofraError::InvalidClockTime(s.to_string()))?;

        Self::new(hour, minute).map_err(|_| SofraError::InvalidClockTime(s.to_string()))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = SofraError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Deserialize an optional `HH:MM`, treating an empty string as "no time".
pub(crate) fn deserialize_optional_clock_time<'de, D>(
    deserializer: D,
) -> Result<Option<ClockTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
