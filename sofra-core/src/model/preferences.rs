//! Language, location and display-name preferences.

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::SofraError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    Tr,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::De => write!(f, "de"),
            Language::Tr => write!(f, "tr"),
        }
    }
}

impl FromStr for Language {
    type Err = SofraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "de" => Ok(Language::De),
            "tr" => Ok(Language::Tr),
            _ => Err(SofraError::InvalidValue {
                field: "language",
                value: s.to_string(),
            }),
        }
    }
}

/// A city offered for the prayer-time lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    /// Name sent to the prayer-time API
    pub name: &'static str,
    pub name_de: &'static str,
    pub name_tr: &'static str,
}

impl City {
    const fn same(name: &'static str) -> Self {
        City {
            name,
            name_de: name,
            name_tr: name,
        }
    }

    pub fn display_name(&self, language: Language) -> &'static str {
        match language {
            Language::De => self.name_de,
            Language::Tr => self.name_tr,
        }
    }

    fn matches(&self, input: &str) -> bool {
        let input = fold(input);
        [self.name, self.name_de, self.name_tr]
            .iter()
            .any(|n| fold(n) == input)
    }
}

/// Lowercase and strip the German and Turkish diacritics, so "MÜNCHEN",
/// "Munchen" and "münchen" all compare equal.
fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| c != '\u{307}')
        .map(|c| match c {
            'ä' => 'a',
            'ö' => 'o',
            'ü' => 'u',
            'ç' => 'c',
            'ğ' => 'g',
            'ı' => 'i',
            'ş' => 's',
            _ => c,
        })
        .collect()
}

static GERMAN_CITIES: [City; 15] = [
    City::same("Berlin"),
    City::same("Hamburg"),
    City {
        name: "Munich",
        name_de: "München",
        name_tr: "Münih",
    },
    City {
        name: "Cologne",
        name_de: "Köln",
        name_tr: "Köln",
    },
    City::same("Frankfurt"),
    City::same("Stuttgart"),
    City {
        name: "Dusseldorf",
        name_de: "Düsseldorf",
        name_tr: "Düsseldorf",
    },
    City::same("Dortmund"),
    City::same("Essen"),
    City::same("Leipzig"),
    City::same("Bremen"),
    City::same("Dresden"),
    City::same("Hannover"),
    City {
        name: "Nuremberg",
        name_de: "Nürnberg",
        name_tr: "Nürnberg",
    },
    City::same("Duisburg"),
];

static TURKISH_CITIES: [City; 14] = [
    City {
        name: "Istanbul",
        name_de: "Istanbul",
        name_tr: "İstanbul",
    },
    City::same("Ankara"),
    City {
        name: "Izmir",
        name_de: "Izmir",
        name_tr: "İzmir",
    },
    City::same("Bursa"),
    City::same("Antalya"),
    City::same("Adana"),
    City::same("Konya"),
    City::same("Gaziantep"),
    City::same("Mersin"),
    City::same("Kayseri"),
    City {
        name: "Eskisehir",
        name_de: "Eskişehir",
        name_tr: "Eskişehir",
    },
    City::same("Trabzon"),
    City::same("Samsun"),
    City {
        name: "Diyarbakir",
        name_de: "Diyarbakır",
        name_tr: "Diyarbakır",
    },
];

/// Country of the selected city. Drives the calculation method and time
/// zone of the prayer-time lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[default]
    Germany,
    Turkey,
}

impl Country {
    /// Name used by the prayer-time API and the persisted preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Country::Germany => "Germany",
            Country::Turkey => "Turkey",
        }
    }

    /// Aladhan calculation method: Muslim World League for Germany,
    /// Diyanet for Turkey.
    pub fn calculation_method(self) -> u8 {
        match self {
            Country::Germany => 3,
            Country::Turkey => 13,
        }
    }

    pub fn time_zone(self) -> Tz {
        match self {
            Country::Germany => chrono_tz::Europe::Berlin,
            Country::Turkey => chrono_tz::Europe::Istanbul,
        }
    }

    pub fn cities(self) -> &'static [City] {
        match self {
            Country::Germany => &GERMAN_CITIES,
            Country::Turkey => &TURKISH_CITIES,
        }
    }

    pub fn default_city(self) -> &'static City {
        &self.cities()[0]
    }

    /// Look up a city by canonical or localized name, ignoring case and
    /// diacritics.
    pub fn find_city(self, input: &str) -> Option<&'static City> {
        let input = input.trim();
        self.cities().iter().find(|c| c.matches(input))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Country {
    type Err = SofraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "germany" | "deutschland" | "almanya" | "de" => Ok(Country::Germany),
            "turkey" | "türkei" | "türkiye" | "turkiye" | "tr" => Ok(Country::Turkey),
            _ => Err(SofraError::InvalidValue {
                field: "country",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub language: Language,
    /// Canonical city name (see `City::name`)
    pub selected_city: String,
    pub selected_country: Country,
    /// Free-text name shown in the greeting
    pub user_name: String,
}

impl Default for Preferences {
    fn default() -> Self {
        let country = Country::default();
        Preferences {
            language: Language::default(),
            selected_city: country.default_city().name.to_string(),
            selected_country: country,
            user_name: String::new(),
        }
    }
}

impl Preferences {
    pub fn city(&self) -> Option<&'static City> {
        self.selected_country.find_city(&self.selected_city)
    }
}
