use anyhow::Result;
use owo_colors::OwoColorize;
use sofra_core::model::{NewRecipe, RecipeCategory, RecipeFilter};

use super::AppStore;
use crate::render::RenderLocalized;
use crate::utils::ids;

pub struct RecipeArgs {
    pub name: String,
    pub category: RecipeCategory,
    pub prep_time: u32,
    pub name_de: Option<String>,
    pub name_tr: Option<String>,
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

fn resolve_id(store: &AppStore, input: &str) -> Result<String> {
    ids::resolve(store.recipes().iter().map(|r| r.id.as_str()), input, "recipe")
}

pub fn list(store: &AppStore, filter: RecipeFilter) {
    let language = store.preferences().language;
    let recipes = store.recipes_filtered(filter);

    if recipes.is_empty() {
        println!("{}", "No recipes found".dimmed());
        return;
    }

    for recipe in recipes {
        println!("{}", recipe.render(language));
    }
}

pub fn add(store: &mut AppStore, args: RecipeArgs) -> Result<()> {
    let recipe = store.add_recipe(NewRecipe {
        name_de: args.name_de.unwrap_or_default(),
        name_tr: args.name_tr.unwrap_or_default(),
        prep_time: args.prep_time,
        image: args.image,
        ingredients: args.ingredients,
        instructions: args.instructions,
        ..NewRecipe::new(args.name, args.category)
    })?;

    let language = store.preferences().language;
    println!("{} {}", "Created".green(), recipe.render(language));
    Ok(())
}

pub fn toggle_favorite(store: &mut AppStore, input: &str) -> Result<()> {
    let id = resolve_id(store, input)?;
    let Some(recipe) = store.toggle_favorite(&id) else {
        anyhow::bail!("Recipe '{input}' not found");
    };

    println!("{}", recipe.render(store.preferences().language));
    Ok(())
}

pub fn remove(store: &mut AppStore, input: &str) -> Result<()> {
    let id = resolve_id(store, input)?;
    let name = store.recipe(&id).map(|r| r.name.clone()).unwrap_or_default();

    store.remove_recipe(&id);
    println!("{} {}", "Deleted".red(), name);
    Ok(())
}

pub fn show(store: &AppStore, input: &str) -> Result<()> {
    let id = resolve_id(store, input)?;
    let Some(recipe) = store.recipe(&id) else {
        anyhow::bail!("Recipe '{input}' not found");
    };
    let language = store.preferences().language;

    println!("{}", recipe.render(language));
    if let Some(image) = &recipe.image {
        println!("  {}", image.dimmed());
    }

    if !recipe.ingredients.is_empty() {
        println!();
        println!("{}", "Ingredients".bold());
        for ingredient in &recipe.ingredients {
            println!("  - {ingredient}");
        }
    }

    if !recipe.instructions.is_empty() {
        println!();
        println!("{}", "Instructions".bold());
        println!("  {}", recipe.instructions);
    }

    Ok(())
}
