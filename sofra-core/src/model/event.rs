//! Iftar events and their guests.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{ClockTime, deserialize_optional_clock_time};
use crate::error::SofraError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// You are hosting guests
    Hosting,
    /// You are invited somewhere
    Invited,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Hosting => write!(f, "hosting"),
            EventType::Invited => write!(f, "invited"),
        }
    }
}

impl FromStr for EventType {
    type Err = SofraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hosting" => Ok(EventType::Hosting),
            "invited" => Ok(EventType::Invited),
            _ => Err(SofraError::InvalidValue {
                field: "event type",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuestStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestStatus::Pending => write!(f, "pending"),
            GuestStatus::Accepted => write!(f, "accepted"),
            GuestStatus::Declined => write!(f, "declined"),
        }
    }
}

impl FromStr for GuestStatus {
    type Err = SofraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(GuestStatus::Pending),
            "accepted" => Ok(GuestStatus::Accepted),
            "declined" => Ok(GuestStatus::Declined),
            _ => Err(SofraError::InvalidValue {
                field: "guest status",
                value: s.to_string(),
            }),
        }
    }
}

/// A guest belongs to exactly one event and lives and dies with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: GuestStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    /// Calendar day, stored as YYYY-MM-DD
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub address: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_clock_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<ClockTime>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub menu: Vec<String>,
    #[serde(default)]
    pub guests: Vec<Guest>,
}

impl Event {
    pub fn guest(&self, guest_id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == guest_id)
    }

    pub fn guests_with_status(&self, status: GuestStatus) -> usize {
        self.guests.iter().filter(|g| g.status == status).count()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Input for creating an event; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub date: NaiveDate,
    pub event_type: EventType,
    pub name: String,
    pub location: String,
    pub address: String,
    pub time: Option<ClockTime>,
    pub notes: String,
    pub menu: Vec<String>,
}

impl NewEvent {
    pub fn new(date: NaiveDate, event_type: EventType, name: impl Into<String>) -> Self {
        NewEvent {
            date,
            event_type,
            name: name.into(),
            location: String::new(),
            address: String::new(),
            time: None,
            notes: String::new(),
            menu: Vec::new(),
        }
    }

    pub(crate) fn into_event(self, id: String) -> Event {
        Event {
            id,
            date: self.date,
            event_type: self.event_type,
            name: self.name.trim().to_string(),
            location: self.location,
            address: self.address,
            time: self.time,
            notes: self.notes,
            menu: self.menu,
            guests: Vec::new(),
        }
    }
}

/// Partial update for an event. `None` leaves the field untouched;
/// `time: Some(None)` clears the time of day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub date: Option<NaiveDate>,
    pub event_type: Option<EventType>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub time: Option<Option<ClockTime>>,
    pub notes: Option<String>,
    pub menu: Option<Vec<String>>,
    pub guests: Option<Vec<Guest>>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == EventPatch::default()
    }

    pub fn apply(self, event: &mut Event) {
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
        if let Some(name) = self.name {
            event.name = name.trim().to_string();
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(address) = self.address {
            event.address = address;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(notes) = self.notes {
            event.notes = notes;
        }
        if let Some(menu) = self.menu {
            event.menu = menu;
        }
        if let Some(guests) = self.guests {
            event.guests = guests;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EventStats {
    pub hosting: usize,
    pub invited: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        NewEvent {
            location: "Zuhause".to_string(),
            menu: vec!["Linsensuppe".to_string(), "Baklava".to_string()],
            ..NewEvent::new(
                NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
                EventType::Hosting,
                "Iftar mit Familie",
            )
        }
        .into_event("evt-1".to_string())
    }

    #[test]
    fn test_serializes_with_type_key_and_plain_date() {
        let event = sample_event();
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "hosting");
        assert_eq!(json["date"], "2026-02-20");
        assert!(json.get("time").is_none());
    }

    #[test]
    fn test_deserializes_empty_time_as_none() {
        let json = r#"{
            "id": "1700000000000",
            "date": "2026-02-21",
            "type": "invited",
            "name": "Bei Tante Emine",
            "time": "",
            "menu": []
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.time, None);
        assert_eq!(event.event_type, EventType::Invited);
        assert!(event.guests.is_empty());
        assert_eq!(event.notes, "");
    }

    #[test]
    fn test_guest_status_defaults_to_pending() {
        let guest: Guest = serde_json::from_str(r#"{"id":"g1","name":"Mehmet"}"#).unwrap();
        assert_eq!(guest.status, GuestStatus::Pending);
    }

    #[test]
    fn test_patch_merges_only_given_fields() {
        let mut event = sample_event();
        let patch = EventPatch {
            name: Some("  Iftar mit Nachbarn ".to_string()),
            time: Some(Some("18:45".parse().unwrap())),
            ..EventPatch::default()
        };

        patch.apply(&mut event);

        assert_eq!(event.name, "Iftar mit Nachbarn");
        assert_eq!(event.time.unwrap().to_string(), "18:45");
        assert_eq!(event.location, "Zuhause");
        assert_eq!(event.menu.len(), 2);
    }

    #[test]
    fn test_patch_can_clear_time() {
        let mut event = sample_event();
        event.time = Some("19:00".parse().unwrap());

        EventPatch {
            time: Some(None),
            ..EventPatch::default()
        }
        .apply(&mut event);

        assert_eq!(event.time, None);
    }

    #[test]
    fn test_parse_event_type_and_status() {
        assert_eq!("Hosting".parse::<EventType>().unwrap(), EventType::Hosting);
        assert_eq!("declined".parse::<GuestStatus>().unwrap(), GuestStatus::Declined);
        assert!("maybe".parse::<GuestStatus>().is_err());
    }
}
