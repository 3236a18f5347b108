//! HTTP client for the Aladhan `timingsByCity` endpoint.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use super::{PrayerQuery, PrayerTimes};
use crate::config::SofraConfig;
use crate::error::{SofraError, SofraResult};

pub struct PrayerTimesClient {
    http: reqwest::Client,
    base_url: String,
}

/// Envelope of every Aladhan response. On failure `data` is a plain
/// message instead of an object.
#[derive(Deserialize)]
struct TimingsResponse {
    code: u16,
    #[serde(default)]
    status: String,
    data: serde_json::Value,
}

#[derive(Deserialize)]
struct TimingsData {
    timings: PrayerTimes,
}

impl PrayerTimesClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> SofraResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SofraError::PrayerApi(format!("Could not build HTTP client: {e}")))?;

        Ok(PrayerTimesClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &SofraConfig) -> SofraResult<Self> {
        Self::new(config.prayer_api_url.clone(), config.request_timeout()?)
    }

    /// GET /v1/timingsByCity/:DD-MM-YYYY
    pub async fn fetch(&self, query: &PrayerQuery) -> SofraResult<PrayerTimes> {
        let url = format!(
            "{}/v1/timingsByCity/{}",
            self.base_url,
            query.date.format("%d-%m-%Y")
        );
        let method = query.method().to_string();

        debug!(city = %query.city, country = %query.country, date = %query.date, "Fetching prayer times");

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("city", query.city.as_str()),
                ("country", query.country.as_str()),
                ("method", method.as_str()),
                ("timezonestring", query.country.time_zone().name()),
            ])
            .send()
            .await
            .map_err(|e| SofraError::PrayerApi(format!("Request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SofraError::PrayerApi(format!("HTTP {status}")));
        }

        let body: TimingsResponse = resp
            .json()
            .await
            .map_err(|e| SofraError::PrayerApi(format!("Unexpected response: {e}")))?;

        if body.code != 200 {
            let detail = body.data.as_str().unwrap_or(&body.status);
            return Err(SofraError::PrayerApi(format!(
                "API returned code {}: {detail}",
                body.code
            )));
        }

        let data: TimingsData = serde_json::from_value(body.data)
            .map_err(|e| SofraError::PrayerApi(format!("Unexpected timings: {e}")))?;

        Ok(data.timings)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::model::Country;

    fn query() -> PrayerQuery {
        PrayerQuery::new(
            "Berlin",
            Country::Germany,
            NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
        )
    }

    fn client(server: &MockServer) -> PrayerTimesClient {
        PrayerTimesClient::new(server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/timingsByCity/20-02-2026")
                .query_param("city", "Berlin")
                .query_param("country", "Germany")
                .query_param("method", "3")
                .query_param("timezonestring", "Europe/Berlin");
            then.status(200).json_body(json!({
                "code": 200,
                "status": "OK",
                "data": {
                    "timings": {
                        "Fajr": "05:23",
                        "Sunrise": "07:17",
                        "Dhuhr": "12:28",
                        "Asr": "15:06",
                        "Maghrib": "17:40",
                        "Isha": "19:26"
                    },
                    "date": { "readable": "20 Feb 2026" }
                }
            }));
        });

        let times = client(&server).fetch(&query()).await.unwrap();

        assert_eq!(times.fajr.to_string(), "05:23");
        assert_eq!(times.iftar().to_string(), "17:40");
        mock.assert();
    }

    #[tokio::test]
    async fn test_fetch_uses_diyanet_for_turkey() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/timingsByCity/20-02-2026")
                .query_param("city", "Istanbul")
                .query_param("method", "13");
            then.status(200).json_body(json!({
                "code": 200,
                "data": { "timings": {
                    "Fajr": "06:05", "Dhuhr": "13:20", "Asr": "16:22",
                    "Maghrib": "18:44", "Isha": "20:02"
                }}
            }));
        });

        let query = PrayerQuery {
            city: "Istanbul".to_string(),
            country: Country::Turkey,
            ..query()
        };
        let times = client(&server).fetch(&query).await.unwrap();

        assert_eq!(times.isha.to_string(), "20:02");
        mock.assert();
    }

    #[tokio::test]
    async fn test_fetch_api_error_code() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/v1/timingsByCity/20-02-2026");
            then.status(200).json_body(json!({
                "code": 400,
                "status": "BAD_REQUEST",
                "data": "Unable to find city."
            }));
        });

        let err = client(&server).fetch(&query()).await.unwrap_err();

        match err {
            SofraError::PrayerApi(msg) => assert!(msg.contains("Unable to find city.")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_http_500() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/v1/timingsByCity/20-02-2026");
            then.status(500).body("Internal Server Error");
        });

        let result = client(&server).fetch(&query()).await;
        assert!(matches!(result, Err(SofraError::PrayerApi(_))));
    }

    #[tokio::test]
    async fn test_fetch_unparsable_times() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/v1/timingsByCity/20-02-2026");
            then.status(200).json_body(json!({
                "code": 200,
                "data": { "timings": { "Fajr": "later" } }
            }));
        });

        let result = client(&server).fetch(&query()).await;
        assert!(matches!(result, Err(SofraError::PrayerApi(_))));
    }
}
