//! Preference operations.
//!
//! Changing the city or country returns whether the prayer times need a
//! refresh; fetching is up to the caller.

use super::{KeyValueStore, Store, StoreKey};
use crate::error::{SofraError, SofraResult};
use crate::model::{City, Country, Language};

impl<B: KeyValueStore> Store<B> {
    pub fn set_language(&mut self, language: Language) {
        self.preferences.language = language;
        self.persist(StoreKey::Language);
    }

    pub fn set_user_name(&mut self, name: &str) {
        self.preferences.user_name = name.trim().to_string();
        self.persist(StoreKey::UserName);
    }

    /// Switch country and reset the city to the country's first city.
    pub fn set_country(&mut self, country: Country) -> bool {
        let changed = self.preferences.selected_country != country;
        self.write_location(country, country.default_city());
        changed
    }

    /// Switch country and city in one step. The city is checked against
    /// `country` first; nothing changes if it is not in its catalogue.
    /// Without a city the country's first city is selected.
    pub fn set_location(&mut self, country: Country, city: Option<&str>) -> SofraResult<bool> {
        let found = match city {
            Some(input) => country
                .find_city(input)
                .ok_or_else(|| SofraError::UnknownCity {
                    city: input.to_string(),
                    country,
                })?,
            None => country.default_city(),
        };

        let changed = self.preferences.selected_country != country
            || self.preferences.selected_city != found.name;
        self.write_location(country, found);

        Ok(changed)
    }

    fn write_location(&mut self, country: Country, city: &City) {
        self.preferences.selected_country = country;
        self.preferences.selected_city = city.name.to_string();
        self.persist(StoreKey::SelectedCountry);
        self.persist(StoreKey::SelectedCity);
    }

    /// Select a city of the current country, by canonical or localized name.
    pub fn set_city(&mut self, city: &str) -> SofraResult<bool> {
        let country = self.preferences.selected_country;
        let found = country.find_city(city).ok_or_else(|| SofraError::UnknownCity {
            city: city.to_string(),
            country,
        })?;

        let changed = self.preferences.selected_city != found.name;
        self.preferences.selected_city = found.name.to_string();
        self.persist(StoreKey::SelectedCity);

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn store() -> Store<MemoryStore> {
        Store::open(MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_country_change_resets_city() {
        let mut store = store();
        store.set_city("Köln").unwrap();

        assert!(store.set_country(Country::Turkey));

        assert_eq!(store.preferences().selected_city, "Istanbul");
        assert_eq!(store.backend().value("selectedCity"), Some("\"Istanbul\""));
        assert_eq!(store.backend().value("selectedCountry"), Some("\"Turkey\""));
    }

    #[test]
    fn test_same_country_is_not_a_change() {
        let mut store = store();
        assert!(!store.set_country(Country::Germany));
    }

    #[test]
    fn test_set_city_stores_canonical_name() {
        let mut store = store();

        assert!(store.set_city("münchen").unwrap());
        assert_eq!(store.preferences().selected_city, "Munich");
        assert!(!store.set_city("Munich").unwrap());
    }

    #[test]
    fn test_city_of_other_country_is_rejected() {
        let mut store = store();

        let err = store.set_city("Ankara").unwrap_err();

        assert!(matches!(err, SofraError::UnknownCity { .. }));
        assert_eq!(store.preferences().selected_city, "Berlin");
    }

    #[test]
    fn test_location_with_foreign_city_changes_nothing() {
        let mut store = store();
        let writes = store.backend().writes();

        let err = store.set_location(Country::Turkey, Some("Hamburg")).unwrap_err();

        assert!(matches!(err, SofraError::UnknownCity { .. }));
        assert_eq!(store.preferences().selected_country, Country::Germany);
        assert_eq!(store.preferences().selected_city, "Berlin");
        assert_eq!(store.backend().writes(), writes);
        assert_eq!(store.backend().value("selectedCountry"), Some("\"Germany\""));
    }

    #[test]
    fn test_location_switches_country_and_city_together() {
        let mut store = store();

        assert!(store.set_location(Country::Turkey, Some("izmir")).unwrap());
        assert_eq!(store.preferences().selected_country, Country::Turkey);
        assert_eq!(store.preferences().selected_city, "Izmir");
        assert_eq!(store.backend().value("selectedCity"), Some("\"Izmir\""));

        assert!(!store.set_location(Country::Turkey, Some("Izmir")).unwrap());
        assert!(store.set_location(Country::Germany, None).unwrap());
        assert_eq!(store.preferences().selected_city, "Berlin");
    }

    #[test]
    fn test_language_and_name_persist() {
        let mut store = store();
        store.set_language(Language::Tr);
        store.set_user_name("  Ayse ");

        assert_eq!(store.backend().value("language"), Some("\"tr\""));
        assert_eq!(store.backend().value("userName"), Some("\"Ayse\""));
    }
}
