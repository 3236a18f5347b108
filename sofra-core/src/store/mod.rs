//! The local store: single source of truth for every collection.
//!
//! `Store` owns events, recipes, shopping items, preferences and the
//! prayer-time state. Every mutation is followed by a synchronous write of
//! the affected key. Writes are best effort: a failing write is logged, the
//! key is remembered, and it is written again with the next mutation. The
//! in-memory state stays authoritative either way.

mod backend;
mod events;
mod preferences;
mod prayer;
mod recipes;
mod seed;
mod shopping;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use prayer::{PrayerRequest, PrayerState};

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::SofraResult;
use crate::model::{Event, Preferences, Recipe, ShoppingItem};

/// Keys of the persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StoreKey {
    Language,
    SelectedCity,
    SelectedCountry,
    Events,
    Recipes,
    ShoppingItems,
    UserName,
}

impl StoreKey {
    pub const ALL: [StoreKey; 7] = [
        StoreKey::Language,
        StoreKey::SelectedCity,
        StoreKey::SelectedCountry,
        StoreKey::Events,
        StoreKey::Recipes,
        StoreKey::ShoppingItems,
        StoreKey::UserName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::Language => "language",
            StoreKey::SelectedCity => "selectedCity",
            StoreKey::SelectedCountry => "selectedCountry",
            StoreKey::Events => "events",
            StoreKey::Recipes => "recipes",
            StoreKey::ShoppingItems => "shoppingItems",
            StoreKey::UserName => "userName",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub struct Store<B: KeyValueStore> {
    backend: B,
    events: Vec<Event>,
    recipes: Vec<Recipe>,
    shopping_items: Vec<ShoppingItem>,
    preferences: Preferences,
    prayer: PrayerState,
    /// Keys whose last write failed (or has not happened yet)
    pending: BTreeSet<StoreKey>,
}

/// Outcome of reading one key at startup.
enum Loaded<T> {
    Missing,
    Corrupt,
    Value(T),
}

impl<B: KeyValueStore> Store<B> {
    /// Load every key from `backend`, seeding the missing ones.
    ///
    /// Seeded keys are written back right away so the next start sees them.
    /// A key that cannot be decoded falls back to its default in memory and
    /// is left alone on disk until the next mutation of that key.
    pub fn open(backend: B) -> SofraResult<Self> {
        let mut seeded = Vec::new();

        let events = Self::load_or(&backend, StoreKey::Events, &mut seeded, seed::events)?;
        let recipes = Self::load_or(&backend, StoreKey::Recipes, &mut seeded, seed::recipes)?;
        let shopping_items = Self::load_or(
            &backend,
            StoreKey::ShoppingItems,
            &mut seeded,
            seed::shopping_items,
        )?;

        let defaults = Preferences::default();
        let preferences = Preferences {
            language: Self::load_text_or(&backend, StoreKey::Language, &mut seeded, defaults.language)?,
            selected_city: Self::load_text_or(
                &backend,
                StoreKey::SelectedCity,
                &mut seeded,
                defaults.selected_city,
            )?,
            selected_country: Self::load_text_or(
                &backend,
                StoreKey::SelectedCountry,
                &mut seeded,
                defaults.selected_country,
            )?,
            user_name: Self::load_text_or(&backend, StoreKey::UserName, &mut seeded, defaults.user_name)?,
        };

        let mut store = Store {
            backend,
            events,
            recipes,
            shopping_items,
            preferences,
            prayer: PrayerState::default(),
            pending: BTreeSet::new(),
        };

        if !seeded.is_empty() {
            info!(keys = ?seeded, "Seeding store with defaults");
            store.pending.extend(seeded);
            store.flush_pending();
        }

        Ok(store)
    }

    fn read<T: DeserializeOwned>(backend: &B, key: StoreKey) -> SofraResult<Loaded<T>> {
        let Some(raw) = backend.get(key.as_str())? else {
            return Ok(Loaded::Missing);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Loaded::Value(value)),
            Err(e) => {
                warn!(key = %key, error = %e, "Stored value is not valid JSON, using default");
                Ok(Loaded::Corrupt)
            }
        }
    }

    fn load_or<T: DeserializeOwned>(
        backend: &B,
        key: StoreKey,
        seeded: &mut Vec<StoreKey>,
        default: impl FnOnce() -> T,
    ) -> SofraResult<T> {
        Ok(match Self::read(backend, key)? {
            Loaded::Value(value) => value,
            Loaded::Corrupt => default(),
            Loaded::Missing => {
                seeded.push(key);
                default()
            }
        })
    }

    /// Like `load_or`, but also accepts a raw (non-JSON) string value.
    fn load_text_or<T: DeserializeOwned + FromStr>(
        backend: &B,
        key: StoreKey,
        seeded: &mut Vec<StoreKey>,
        default: T,
    ) -> SofraResult<T> {
        let Some(raw) = backend.get(key.as_str())? else {
            seeded.push(key);
            return Ok(default);
        };

        let value = serde_json::from_str(&raw)
            .ok()
            .or_else(|| raw.trim().parse().ok());

        Ok(value.unwrap_or_else(|| {
            warn!(key = %key, "Stored preference is not readable, using default");
            default
        }))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn shopping_items(&self) -> &[ShoppingItem] {
        &self.shopping_items
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn prayer(&self) -> &PrayerState {
        &self.prayer
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Keys not yet durably written.
    pub fn pending_writes(&self) -> Vec<StoreKey> {
        self.pending.iter().copied().collect()
    }

    /// Write every pending key, returning the first failure.
    pub fn flush(&mut self) -> SofraResult<()> {
        let mut first_error = None;

        for key in self.pending_writes() {
            match self.write_key(key) {
                Ok(()) => {
                    self.pending.remove(&key);
                }
                Err(e) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Mark `key` as changed and write everything pending.
    fn persist(&mut self, key: StoreKey) {
        self.pending.insert(key);
        self.flush_pending();
    }

    fn flush_pending(&mut self) {
        for key in self.pending_writes() {
            match self.write_key(key) {
                Ok(()) => {
                    debug!(key = %key, "Persisted");
                    self.pending.remove(&key);
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Could not persist, will retry on next change");
                }
            }
        }
    }

    fn write_key(&mut self, key: StoreKey) -> SofraResult<()> {
        let value = self.encode(key)?;
        self.backend.set(key.as_str(), &value)
    }

    fn encode(&self, key: StoreKey) -> SofraResult<String> {
        let prefs = &self.preferences;
        let value = match key {
            StoreKey::Language => serde_json::to_string(&prefs.language),
            StoreKey::SelectedCity => serde_json::to_string(&prefs.selected_city),
            StoreKey::SelectedCountry => serde_json::to_string(&prefs.selected_country),
            StoreKey::Events => serde_json::to_string(&self.events),
            StoreKey::Recipes => serde_json::to_string(&self.recipes),
            StoreKey::ShoppingItems => serde_json::to_string(&self.shopping_items),
            StoreKey::UserName => serde_json::to_string(&prefs.user_name),
        }?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Country, Language, NewShoppingItem, ShoppingCategory};

    #[test]
    fn test_first_open_seeds_and_persists_every_key() {
        let store = Store::open(MemoryStore::new()).unwrap();

        assert!(store.events().is_empty());
        assert_eq!(store.recipes().len(), 2);
        assert_eq!(store.shopping_items().len(), 3);
        assert!(store.pending_writes().is_empty());

        for key in StoreKey::ALL {
            assert!(
                store.backend().value(key.as_str()).is_some(),
                "{key} was not written"
            );
        }
        assert_eq!(store.backend().value("language"), Some("\"de\""));
        assert_eq!(store.backend().value("selectedCountry"), Some("\"Germany\""));
    }

    #[test]
    fn test_shopping_item_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(FileStore::new(dir.path())).unwrap();
        store.clear_shopping_list();

        let added = store
            .add_shopping_item(NewShoppingItem::new("Tomaten", "1kg", ShoppingCategory::Fruits))
            .unwrap();

        let reloaded = Store::open(FileStore::new(dir.path())).unwrap();

        assert_eq!(reloaded.shopping_items(), std::slice::from_ref(&added));
        let item = &reloaded.shopping_items()[0];
        assert_eq!(item.name, "Tomaten");
        assert_eq!(item.quantity, "1kg");
        assert_eq!(item.category, ShoppingCategory::Fruits);
        assert!(!item.completed);
    }

    #[test]
    fn test_reload_preserves_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::open(FileStore::new(dir.path())).unwrap();
        store.add_shopping_items_bulk("Datteln (1 Packung)\nMilch\nSimit (4)", ShoppingCategory::Other);
        store.set_language(Language::Tr);
        store.set_country(Country::Turkey);

        let reloaded = Store::open(FileStore::new(dir.path())).unwrap();

        assert_eq!(reloaded.shopping_items(), store.shopping_items());
        assert_eq!(reloaded.recipes(), store.recipes());
        assert_eq!(reloaded.preferences(), store.preferences());
        assert_eq!(reloaded.preferences().selected_city, "Istanbul");
    }

    #[test]
    fn test_existing_empty_collections_are_not_reseeded() {
        let mut backend = MemoryStore::new();
        backend.set("recipes", "[]").unwrap();
        backend.set("shoppingItems", "[]").unwrap();

        let store = Store::open(backend).unwrap();

        assert!(store.recipes().is_empty());
        assert!(store.shopping_items().is_empty());
    }

    #[test]
    fn test_legacy_raw_preference_values() {
        let mut backend = MemoryStore::new();
        backend.set("language", "tr").unwrap();
        backend.set("userName", "Ayse").unwrap();
        backend.set("selectedCountry", "Turkey").unwrap();

        let store = Store::open(backend).unwrap();

        assert_eq!(store.preferences().language, Language::Tr);
        assert_eq!(store.preferences().user_name, "Ayse");
        assert_eq!(store.preferences().selected_country, Country::Turkey);
    }

    #[test]
    fn test_corrupt_collection_falls_back_without_overwrite() {
        let mut backend = MemoryStore::new();
        backend.set("events", "{not json").unwrap();

        let store = Store::open(backend).unwrap();

        assert!(store.events().is_empty());
        assert_eq!(store.backend().value("events"), Some("{not json"));
    }

    #[test]
    fn test_failed_write_is_retried_on_next_mutation() {
        let mut store = Store::open(MemoryStore::new()).unwrap();
        store.backend_mut().set_fail_writes(true);

        let item = store
            .add_shopping_item(NewShoppingItem::new("Zucker", "1kg", ShoppingCategory::Grains))
            .unwrap();

        // In-memory state is authoritative even though the write failed
        assert!(store.shopping_items().iter().any(|i| i.id == item.id));
        assert_eq!(store.pending_writes(), vec![StoreKey::ShoppingItems]);

        store.backend_mut().set_fail_writes(false);
        store.set_user_name("Ayse");

        assert!(store.pending_writes().is_empty());
        let persisted = store.backend().value("shoppingItems").unwrap();
        assert!(persisted.contains("Zucker"));
        assert_eq!(store.backend().value("userName"), Some("\"Ayse\""));
    }

    #[test]
    fn test_flush_reports_failure() {
        let mut store = Store::open(MemoryStore::new()).unwrap();
        store.backend_mut().set_fail_writes(true);
        store.set_user_name("Mehmet");

        assert!(store.flush().is_err());

        store.backend_mut().set_fail_writes(false);
        store.flush().unwrap();
        assert!(store.pending_writes().is_empty());
    }
}
