use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use sofra_core::model::{NewShoppingItem, ShoppingCategory};

use super::AppStore;
use crate::render::Render;
use crate::utils::ids;

fn resolve_id(store: &AppStore, input: &str) -> Result<String> {
    ids::resolve(
        store.shopping_items().iter().map(|i| i.id.as_str()),
        input,
        "item",
    )
}

pub fn list(store: &AppStore) {
    let groups = store.shopping_by_category();

    if groups.is_empty() {
        println!("{}", "Shopping list is empty".dimmed());
        return;
    }

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let count = format!("{}/{}", group.completed, group.items.len());
        println!("{} {}", group.category.to_string().bold(), count.dimmed());
        for item in &group.items {
            println!("  {}", item.render());
        }
    }

    let (completed, total) = store.shopping_progress();
    println!();
    println!("{}", format!("{completed} of {total} done").dimmed());
}

pub fn add(
    store: &mut AppStore,
    name: String,
    quantity: String,
    category: ShoppingCategory,
) -> Result<()> {
    let item = store.add_shopping_item(NewShoppingItem::new(name, quantity, category))?;
    println!("{} {}", "Added".green(), item.render());
    Ok(())
}

pub fn bulk(store: &mut AppStore, text: Option<String>, category: ShoppingCategory) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => std::io::read_to_string(std::io::stdin()).context("Failed to read from stdin")?,
    };

    let added = store.add_shopping_items_bulk(&text, category);
    if added.is_empty() {
        anyhow::bail!("No items found in the input");
    }

    for item in &added {
        println!("{} {}", "+".green(), item.render());
    }
    Ok(())
}

pub fn toggle(store: &mut AppStore, input: &str) -> Result<()> {
    let id = resolve_id(store, input)?;
    let Some(item) = store.toggle_completed(&id) else {
        anyhow::bail!("Item '{input}' not found");
    };

    println!("{}", item.render());
    Ok(())
}

pub fn remove(store: &mut AppStore, input: &str) -> Result<()> {
    let id = resolve_id(store, input)?;
    let name = store
        .shopping_item(&id)
        .map(|i| i.name.clone())
        .unwrap_or_default();

    store.remove_shopping_item(&id);
    println!("{} {}", "Removed".red(), name);
    Ok(())
}

pub fn clear(store: &mut AppStore, all: bool) {
    let removed = if all {
        store.clear_shopping_list()
    } else {
        store.clear_completed()
    };

    println!("{}", format!("Removed {removed} items").dimmed());
}
