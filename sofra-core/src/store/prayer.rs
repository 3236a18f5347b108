//! Prayer-time refresh state.
//!
//! A refresh is split into `begin_prayer_refresh` (which hands out a
//! request with a fresh sequence number) and `complete_prayer_refresh`.
//! Only the newest request may land; answers to older ones are dropped so
//! a slow response for a previous city never overwrites the current one.

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::{KeyValueStore, Store};
use crate::error::SofraResult;
use crate::prayer::{PrayerQuery, PrayerTimes, PrayerTimesClient};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrayerState {
    times: Option<PrayerTimes>,
    loading: bool,
    error: Option<String>,
    /// Sequence number of the newest request handed out
    issued: u64,
}

impl PrayerState {
    /// Last successfully fetched times, kept across failed refreshes.
    pub fn times(&self) -> Option<&PrayerTimes> {
        self.times.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Ticket for one in-flight lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerRequest {
    pub sequence: u64,
    pub query: PrayerQuery,
}

impl<B: KeyValueStore> Store<B> {
    /// Start a lookup for the selected city on `date`.
    pub fn begin_prayer_refresh(&mut self, date: NaiveDate) -> PrayerRequest {
        self.prayer.issued += 1;
        self.prayer.loading = true;

        PrayerRequest {
            sequence: self.prayer.issued,
            query: PrayerQuery::from_preferences(&self.preferences, date),
        }
    }

    /// Apply the outcome of `request`. Returns false when a newer request
    /// has been issued in the meantime and the outcome was discarded.
    pub fn complete_prayer_refresh(
        &mut self,
        request: &PrayerRequest,
        result: SofraResult<PrayerTimes>,
    ) -> bool {
        if request.sequence != self.prayer.issued {
            debug!(
                sequence = request.sequence,
                newest = self.prayer.issued,
                city = %request.query.city,
                "Ignoring stale prayer time response"
            );
            return false;
        }

        self.prayer.loading = false;
        match result {
            Ok(times) => {
                self.prayer.times = Some(times);
                self.prayer.error = None;
            }
            Err(e) => {
                warn!(city = %request.query.city, error = %e, "Could not fetch prayer times");
                self.prayer.error = Some(e.to_string());
            }
        }
        true
    }

    /// Fetch today's (or `date`'s) times for the selected city.
    pub async fn refresh_prayer_times(
        &mut self,
        client: &PrayerTimesClient,
        date: NaiveDate,
    ) -> bool {
        let request = self.begin_prayer_refresh(date);
        let result = client.fetch(&request.query).await;
        self.complete_prayer_refresh(&request, result)
    }
}
