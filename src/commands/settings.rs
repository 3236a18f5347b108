use anyhow::Result;
use owo_colors::OwoColorize;
use sofra_core::model::{Country, Language};
use sofra_core::store::{KeyValueStore, Store};

pub struct Changes {
    pub language: Option<Language>,
    pub country: Option<Country>,
    pub city: Option<String>,
    pub name: Option<String>,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.language.is_none() && self.country.is_none() && self.city.is_none() && self.name.is_none()
    }
}

pub fn run<B: KeyValueStore>(store: &mut Store<B>, changes: Changes) -> Result<()> {
    if changes.is_empty() {
        show(store);
        return Ok(());
    }

    // Location first, so a rejected city leaves every setting untouched
    let location_changed = match (changes.country, changes.city.as_deref()) {
        (Some(country), city) => store.set_location(country, city)?,
        (None, Some(city)) => store.set_city(city)?,
        (None, None) => false,
    };

    if let Some(language) = changes.language {
        store.set_language(language);
    }
    if let Some(name) = changes.name {
        store.set_user_name(&name);
    }

    show(store);

    if location_changed {
        println!();
        println!(
            "{}",
            "Location changed. Run `sofra prayer` for the new prayer times.".dimmed()
        );
    }

    Ok(())
}

fn show<B: KeyValueStore>(store: &Store<B>) {
    let prefs = store.preferences();
    let name = if prefs.user_name.is_empty() {
        "-"
    } else {
        prefs.user_name.as_str()
    };

    println!("  {:<9} {}", "Language".dimmed(), prefs.language);
    println!("  {:<9} {}", "Country".dimmed(), prefs.selected_country);
    println!("  {:<9} {}", "City".dimmed(), prefs.selected_city);
    println!("  {:<9} {}", "Name".dimmed(), name);

    let cities: Vec<&str> = prefs
        .selected_country
        .cities()
        .iter()
        .map(|c| c.display_name(prefs.language))
        .collect();
    println!();
    println!("{}", format!("Cities: {}", cities.join(", ")).dimmed());
}

#[cfg(test)]
mod tests {
    use sofra_core::SofraError;
    use sofra_core::store::MemoryStore;

    use super::*;

    fn changes() -> Changes {
        Changes {
            language: None,
            country: None,
            city: None,
            name: None,
        }
    }

    #[test]
    fn test_city_outside_new_country_is_rejected_without_changes() {
        let mut store = Store::open(MemoryStore::new()).unwrap();

        let result = run(
            &mut store,
            Changes {
                language: Some(Language::Tr),
                country: Some(Country::Turkey),
                city: Some("Hamburg".to_string()),
                ..changes()
            },
        );

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SofraError>(),
            Some(SofraError::UnknownCity { .. })
        ));
        let prefs = store.preferences();
        assert_eq!(prefs.selected_country, Country::Germany);
        assert_eq!(prefs.selected_city, "Berlin");
        assert_eq!(prefs.language, Language::De);
        assert_eq!(store.backend().value("selectedCountry"), Some("\"Germany\""));
    }

    #[test]
    fn test_country_and_city_together() {
        let mut store = Store::open(MemoryStore::new()).unwrap();

        run(
            &mut store,
            Changes {
                country: Some(Country::Turkey),
                city: Some("Ankara".to_string()),
                ..changes()
            },
        )
        .unwrap();

        assert_eq!(store.preferences().selected_country, Country::Turkey);
        assert_eq!(store.preferences().selected_city, "Ankara");
    }
}
