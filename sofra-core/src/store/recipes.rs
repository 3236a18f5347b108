//! Recipe operations.

use super::{KeyValueStore, Store, StoreKey};
use crate::error::SofraResult;
use crate::model::{NewRecipe, Recipe, RecipeFilter, RecipePatch, new_id, validate_name};

impl<B: KeyValueStore> Store<B> {
    pub fn add_recipe(&mut self, new: NewRecipe) -> SofraResult<Recipe> {
        validate_name(&new.name, "Recipe")?;

        let recipe = new.into_recipe(new_id());
        self.recipes.push(recipe.clone());
        self.persist(StoreKey::Recipes);

        Ok(recipe)
    }

    pub fn update_recipe(&mut self, id: &str, patch: RecipePatch) -> SofraResult<Option<Recipe>> {
        let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        let mut updated = recipe.clone();
        patch.apply(&mut updated);
        validate_name(&updated.name, "Recipe")?;
        *recipe = updated.clone();

        self.persist(StoreKey::Recipes);
        Ok(Some(updated))
    }

    pub fn remove_recipe(&mut self, id: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        let removed = self.recipes.len() != before;

        if removed {
            self.persist(StoreKey::Recipes);
        }
        removed
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Flip `is_favorite` and nothing else.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<Recipe> {
        let recipe = self.recipes.iter_mut().find(|r| r.id == id)?;
        recipe.is_favorite = !recipe.is_favorite;
        let recipe = recipe.clone();

        self.persist(StoreKey::Recipes);
        Some(recipe)
    }

    pub fn recipes_filtered(&self, filter: RecipeFilter) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| filter.matches(r)).collect()
    }
}
