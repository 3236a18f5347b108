//! Event and guest operations.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use super::{KeyValueStore, Store, StoreKey};
use crate::constants::{UPCOMING_LIMIT, UPCOMING_WINDOW_DAYS};
use crate::error::SofraResult;
use crate::model::{
    Event, EventPatch, EventStats, EventType, Guest, GuestStatus, NewEvent, new_id, validate_name,
};

impl<B: KeyValueStore> Store<B> {
    pub fn add_event(&mut self, new: NewEvent) -> SofraResult<Event> {
        validate_name(&new.name, "Event")?;

        let event = new.into_event(new_id());
        debug!(id = %event.id, date = %event.date, "Adding event");
        self.events.push(event.clone());
        self.persist(StoreKey::Events);

        Ok(event)
    }

    /// Merge `patch` into the event with `id`. Returns `Ok(None)` if there is
    /// no such event.
    pub fn update_event(&mut self, id: &str, patch: EventPatch) -> SofraResult<Option<Event>> {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        let mut updated = event.clone();
        patch.apply(&mut updated);
        validate_name(&updated.name, "Event")?;
        *event = updated.clone();

        self.persist(StoreKey::Events);
        Ok(Some(updated))
    }

    /// Remove the event with `id` (and its guests). Returns whether it existed.
    pub fn remove_event(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() != before;

        if removed {
            self.persist(StoreKey::Events);
        }
        removed
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events on `day`, in insertion order.
    pub fn events_by_date(&self, day: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == day).collect()
    }

    /// All events by date ascending; same-day events keep insertion order.
    pub fn sorted_events(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by_key(|e| e.date);
        events
    }

    /// The next few events from `today` through one week ahead.
    pub fn upcoming_events(&self, today: NaiveDate) -> Vec<&Event> {
        let end = today + Duration::days(UPCOMING_WINDOW_DAYS);

        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.date >= today && e.date <= end)
            .collect();
        events.sort_by_key(|e| e.date);
        events.truncate(UPCOMING_LIMIT);
        events
    }

    pub fn event_stats(&self) -> EventStats {
        self.events
            .iter()
            .fold(EventStats::default(), |mut stats, e| {
                match e.event_type {
                    EventType::Hosting => stats.hosting += 1,
                    EventType::Invited => stats.invited += 1,
                }
                stats
            })
    }

    /// Add a pending guest. `Ok(None)` if the event does not exist.
    pub fn add_guest(&mut self, event_id: &str, name: &str) -> SofraResult<Option<Guest>> {
        validate_name(name, "Guest")?;

        let Some(event) = self.events.iter_mut().find(|e| e.id == event_id) else {
            return Ok(None);
        };

        let guest = Guest {
            id: new_id(),
            name: name.trim().to_string(),
            status: GuestStatus::Pending,
        };
        event.guests.push(guest.clone());

        self.persist(StoreKey::Events);
        Ok(Some(guest))
    }

    pub fn set_guest_status(
        &mut self,
        event_id: &str,
        guest_id: &str,
        status: GuestStatus,
    ) -> Option<Guest> {
        let guest = self
            .events
            .iter_mut()
            .find(|e| e.id == event_id)?
            .guests
            .iter_mut()
            .find(|g| g.id == guest_id)?;

        guest.status = status;
        let guest = guest.clone();

        self.persist(StoreKey::Events);
        Some(guest)
    }

    pub fn remove_guest(&mut self, event_id: &str, guest_id: &str) -> bool {
        let Some(event) = self.events.iter_mut().find(|e| e.id == event_id) else {
            return false;
        };

        let before = event.guests.len();
        event.guests.retain(|g| g.id != guest_id);
        let removed = event.guests.len() != before;

        if removed {
            self.persist(StoreKey::Events);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::*;
    use crate::calendar::calendar_day_of;
    use crate::error::SofraError;
    use crate::store::MemoryStore;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store() -> Store<MemoryStore> {
        Store::open(MemoryStore::new()).unwrap()
    }

    fn add(store: &mut Store<MemoryStore>, date: NaiveDate, kind: EventType, name: &str) -> Event {
        store.add_event(NewEvent::new(date, kind, name)).unwrap()
    }

    #[test]
    fn test_add_event_assigns_id_and_persists() {
        let mut store = store();
        let event = add(&mut store, day(2026, 2, 20), EventType::Hosting, "  Iftar mit Familie ");

        assert!(!event.id.is_empty());
        assert_eq!(event.name, "Iftar mit Familie");
        assert!(event.guests.is_empty());
        assert_eq!(store.events(), std::slice::from_ref(&event));
        assert!(store.backend().value("events").unwrap().contains("Iftar mit Familie"));
    }

    #[test]
    fn test_add_event_rejects_blank_name() {
        let mut store = store();
        let result = store.add_event(NewEvent::new(day(2026, 2, 20), EventType::Hosting, " "));

        assert!(matches!(result, Err(SofraError::Validation(_))));
        assert!(store.events().is_empty());
    }

    #[test]
    fn test_events_by_date_ignores_caller_offset() {
        let mut store = store();
        let target = day(2026, 3, 1);
        let a = add(&mut store, target, EventType::Hosting, "A");
        add(&mut store, day(2026, 3, 2), EventType::Hosting, "B");
        let c = add(&mut store, target, EventType::Invited, "C");
        add(&mut store, day(2026, 2, 28), EventType::Invited, "D");

        // 23:30 on March 1st, seen from two different offsets
        let berlin = FixedOffset::east_opt(3600).unwrap();
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let late_in_berlin = berlin.with_ymd_and_hms(2026, 3, 1, 23, 30, 0).unwrap();
        let early_in_new_york = new_york.with_ymd_and_hms(2026, 3, 1, 0, 15, 0).unwrap();

        for instant_day in [calendar_day_of(&late_in_berlin), calendar_day_of(&early_in_new_york)] {
            let ids: Vec<&str> = store
                .events_by_date(instant_day)
                .iter()
                .map(|e| e.id.as_str())
                .collect();
            assert_eq!(ids, vec![a.id.as_str(), c.id.as_str()]);
        }
    }

    #[test]
    fn test_update_event_merges_patch() {
        let mut store = store();
        let event = add(&mut store, day(2026, 2, 20), EventType::Hosting, "Iftar");

        let updated = store
            .update_event(
                &event.id,
                EventPatch {
                    location: Some("Bei Oma".to_string()),
                    time: Some(Some("18:30".parse().unwrap())),
                    ..EventPatch::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, event.id);
        assert_eq!(updated.name, "Iftar");
        assert_eq!(updated.location, "Bei Oma");
        assert_eq!(updated.time.unwrap().to_string(), "18:30");
        assert_eq!(store.event(&event.id), Some(&updated));
    }

    #[test]
    fn test_update_missing_event_is_none() {
        let mut store = store();
        let result = store.update_event("nope", EventPatch::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_update_event_rejects_blank_name_and_keeps_old() {
        let mut store = store();
        let event = add(&mut store, day(2026, 2, 20), EventType::Hosting, "Iftar");

        let result = store.update_event(
            &event.id,
            EventPatch {
                name: Some("".to_string()),
                ..EventPatch::default()
            },
        );

        assert!(result.is_err());
        assert_eq!(store.event(&event.id).unwrap().name, "Iftar");
    }

    #[test]
    fn test_remove_event_is_idempotent() {
        let mut store = store();
        let event = add(&mut store, day(2026, 2, 20), EventType::Hosting, "Iftar");

        assert!(store.remove_event(&event.id));
        assert!(!store.remove_event(&event.id));
        assert!(store.events().is_empty());
    }

    #[test]
    fn test_upcoming_window_order_and_limit() {
        let mut store = store();
        let today = day(2026, 2, 20);

        add(&mut store, day(2026, 2, 19), EventType::Hosting, "yesterday");
        add(&mut store, day(2026, 2, 28), EventType::Hosting, "too far");
        add(&mut store, day(2026, 2, 27), EventType::Invited, "last day");
        add(&mut store, day(2026, 2, 22), EventType::Invited, "first 22nd");
        add(&mut store, today, EventType::Hosting, "today");
        add(&mut store, day(2026, 2, 22), EventType::Hosting, "second 22nd");
        add(&mut store, day(2026, 2, 25), EventType::Hosting, "25th");
        add(&mut store, day(2026, 2, 26), EventType::Hosting, "26th");

        let names: Vec<&str> = store
            .upcoming_events(today)
            .iter()
            .map(|e| e.name.as_str())
            .collect();

        assert_eq!(
            names,
            vec!["today", "first 22nd", "second 22nd", "25th", "26th"]
        );
    }

    #[test]
    fn test_event_stats() {
        let mut store = store();
        add(&mut store, day(2026, 2, 20), EventType::Hosting, "A");
        add(&mut store, day(2026, 2, 21), EventType::Hosting, "B");
        add(&mut store, day(2026, 2, 22), EventType::Invited, "C");

        assert_eq!(
            store.event_stats(),
            EventStats {
                hosting: 2,
                invited: 1
            }
        );
    }

    #[test]
    fn test_guest_lifecycle() {
        let mut store = store();
        let event = add(&mut store, day(2026, 2, 20), EventType::Hosting, "Iftar");

        let guest = store.add_guest(&event.id, " Ayse ").unwrap().unwrap();
        assert_eq!(guest.name, "Ayse");
        assert_eq!(guest.status, GuestStatus::Pending);

        let accepted = store
            .set_guest_status(&event.id, &guest.id, GuestStatus::Accepted)
            .unwrap();
        assert_eq!(accepted.status, GuestStatus::Accepted);
        assert_eq!(store.event(&event.id).unwrap().guest(&guest.id), Some(&accepted));
        assert_eq!(
            store.event(&event.id).unwrap().guests_with_status(GuestStatus::Accepted),
            1
        );

        assert!(store.remove_guest(&event.id, &guest.id));
        assert!(!store.remove_guest(&event.id, &guest.id));
        assert!(store.event(&event.id).unwrap().guests.is_empty());
    }

    #[test]
    fn test_guest_on_missing_event() {
        let mut store = store();

        assert!(store.add_guest("nope", "Ayse").unwrap().is_none());
        assert!(store.set_guest_status("nope", "g", GuestStatus::Declined).is_none());
    }

    #[test]
    fn test_removing_event_drops_its_guests() {
        let mut store = store();
        let event = add(&mut store, day(2026, 2, 20), EventType::Hosting, "Iftar");
        store.add_guest(&event.id, "Ayse").unwrap();

        store.remove_event(&event.id);
        assert!(!store.backend().value("events").unwrap().contains("Ayse"));
    }
}
