use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::ClockTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerName {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        };
        write!(f, "{name}")
    }
}

/// The five daily prayer times, as returned in `data.timings`.
///
/// Other timings the API sends (Sunrise, Imsak, ...) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PrayerTimes {
    pub fajr: ClockTime,
    pub dhuhr: ClockTime,
    pub asr: ClockTime,
    pub maghrib: ClockTime,
    pub isha: ClockTime,
}

impl PrayerTimes {
    /// Fast breaks at Maghrib.
    pub fn iftar(&self) -> ClockTime {
        self.maghrib
    }

    /// Fast begins at Fajr.
    pub fn sahur(&self) -> ClockTime {
        self.fajr
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerName, ClockTime)> {
        [
            (PrayerName::Fajr, self.fajr),
            (PrayerName::Dhuhr, self.dhuhr),
            (PrayerName::Asr, self.asr),
            (PrayerName::Maghrib, self.maghrib),
            (PrayerName::Isha, self.isha),
        ]
        .into_iter()
    }
}
