//! Entities kept by the store.
//!
//! Field names serialize in camelCase so the persisted JSON stays readable
//! by anything that shares the same data directory layout.

mod event;
mod preferences;
mod recipe;
mod shopping;

pub use event::{Event, EventPatch, EventStats, EventType, Guest, GuestStatus, NewEvent};
pub use preferences::{City, Country, Language, Preferences};
pub use recipe::{NewRecipe, Recipe, RecipeCategory, RecipeFilter, RecipePatch};
pub use shopping::{CategoryGroup, NewShoppingItem, ShoppingCategory, ShoppingItem, ShoppingItemPatch, parse_bulk};

use serde::{Deserialize, Deserializer};

use crate::error::{SofraError, SofraResult};

/// Generate a new collision-free entity id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Reject blank names; every entity needs something to show.
pub(crate) fn validate_name(name: &str, what: &str) -> SofraResult<()> {
    if name.trim().is_empty() {
        return Err(SofraError::Validation(format!("{what} name must not be empty")));
    }
    Ok(())
}

pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}
