//! Daily prayer times from the Aladhan API.

mod client;
mod times;

pub use client::PrayerTimesClient;
pub use times::{PrayerName, PrayerTimes};

use chrono::NaiveDate;

use crate::model::{Country, Preferences};

/// What to look up: a city of a country on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerQuery {
    pub city: String,
    pub country: Country,
    pub date: NaiveDate,
}

impl PrayerQuery {
    pub fn new(city: impl Into<String>, country: Country, date: NaiveDate) -> Self {
        PrayerQuery {
            city: city.into(),
            country,
            date,
        }
    }

    pub fn from_preferences(preferences: &Preferences, date: NaiveDate) -> Self {
        Self::new(
            preferences.selected_city.clone(),
            preferences.selected_country,
            date,
        )
    }

    pub fn method(&self) -> u8 {
        self.country.calculation_method()
    }
}
