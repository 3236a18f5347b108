//! Shopping list items and bulk text parsing.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SofraError;

/// Items in a bulk paste are separated by newlines, commas or semicolons.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\n,;]+").expect("static regex should not panic"));

/// `Äpfel (2kg)` → name `Äpfel`, quantity `2kg`.
static QUANTITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\((.+?)\)$").expect("static regex should not panic"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShoppingCategory {
    /// Fruits and vegetables
    Fruits,
    Meat,
    Dairy,
    Grains,
    Spices,
    Drinks,
    Other,
}

impl ShoppingCategory {
    /// Display order of the grouped list.
    pub const ALL: [ShoppingCategory; 7] = [
        ShoppingCategory::Fruits,
        ShoppingCategory::Meat,
        ShoppingCategory::Dairy,
        ShoppingCategory::Grains,
        ShoppingCategory::Spices,
        ShoppingCategory::Drinks,
        ShoppingCategory::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShoppingCategory::Fruits => "fruits",
            ShoppingCategory::Meat => "meat",
            ShoppingCategory::Dairy => "dairy",
            ShoppingCategory::Grains => "grains",
            ShoppingCategory::Spices => "spices",
            ShoppingCategory::Drinks => "drinks",
            ShoppingCategory::Other => "other",
        }
    }
}

impl fmt::Display for ShoppingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShoppingCategory {
    type Err = SofraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| SofraError::InvalidValue {
                field: "shopping category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    /// Free-form, e.g. "500g" or "3 Stück"
    #[serde(default)]
    pub quantity: String,
    pub category: ShoppingCategory,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShoppingItem {
    pub name: String,
    pub quantity: String,
    pub category: ShoppingCategory,
}

impl NewShoppingItem {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        category: ShoppingCategory,
    ) -> Self {
        NewShoppingItem {
            name: name.into(),
            quantity: quantity.into(),
            category,
        }
    }

    pub(crate) fn into_item(self, id: String) -> ShoppingItem {
        ShoppingItem {
            id,
            name: self.name.trim().to_string(),
            quantity: self.quantity.trim().to_string(),
            category: self.category,
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingItemPatch {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub category: Option<ShoppingCategory>,
    pub completed: Option<bool>,
}

impl ShoppingItemPatch {
    pub fn apply(self, item: &mut ShoppingItem) {
        if let Some(name) = self.name {
            item.name = name.trim().to_string();
        }
        if let Some(quantity) = self.quantity {
            item.quantity = quantity.trim().to_string();
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
    }
}

/// Items of one category, in list order.
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub category: ShoppingCategory,
    pub items: Vec<&'a ShoppingItem>,
    pub completed: usize,
}

/// Parse a free-text paste into items, one per line, comma or semicolon.
///
/// A trailing parenthetical becomes the quantity. Input order is kept and
/// every item gets `category`.
pub fn parse_bulk(text: &str, category: ShoppingCategory) -> Vec<NewShoppingItem> {
    SEPARATOR_REGEX
        .split(text)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match QUANTITY_REGEX.captures(entry) {
            Some(caps) => NewShoppingItem::new(caps[1].trim(), caps[2].trim(), category),
            None => NewShoppingItem::new(entry, "", category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_and_quantities(items: &[NewShoppingItem]) -> Vec<(&str, &str)> {
        items
            .iter()
            .map(|i| (i.name.as_str(), i.quantity.as_str()))
            .collect()
    }

    #[test]
    fn test_parse_bulk_lines_with_quantities() {
        let items = parse_bulk(
            "Äpfel (2kg)\nTomaten\nGurken (3 Stück)",
            ShoppingCategory::Fruits,
        );

        assert_eq!(
            names_and_quantities(&items),
            vec![("Äpfel", "2kg"), ("Tomaten", ""), ("Gurken", "3 Stück")]
        );
        assert!(items.iter().all(|i| i.category == ShoppingCategory::Fruits));
    }

    #[test]
    fn test_parse_bulk_mixed_separators_and_blanks() {
        let items = parse_bulk(
            "Milch, Joghurt (500g);; \n\n  Ayran ;",
            ShoppingCategory::Dairy,
        );

        assert_eq!(
            names_and_quantities(&items),
            vec![("Milch", ""), ("Joghurt", "500g"), ("Ayran", "")]
        );
    }

    #[test]
    fn test_parse_bulk_blank_input() {
        assert!(parse_bulk("  \n ,; ", ShoppingCategory::Other).is_empty());
    }

    #[test]
    fn test_parse_bulk_parenthesis_not_at_end() {
        let items = parse_bulk("Sumak (gemahlen) extra", ShoppingCategory::Spices);

        assert_eq!(
            names_and_quantities(&items),
            vec![("Sumak (gemahlen) extra", "")]
        );
    }

    #[test]
    fn test_category_roundtrip_names() {
        for category in ShoppingCategory::ALL {
            assert_eq!(category.as_str().parse::<ShoppingCategory>().unwrap(), category);
            assert_eq!(
                serde_json::to_string(&category).unwrap(),
                format!("\"{category}\"")
            );
        }
    }
}
