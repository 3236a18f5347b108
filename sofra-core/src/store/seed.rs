//! Sample data for a first run.

use crate::model::{Event, Recipe, RecipeCategory, ShoppingCategory, ShoppingItem};

pub(super) fn events() -> Vec<Event> {
    Vec::new()
}

pub(super) fn recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".to_string(),
            name: "Mercimek Corbasi".to_string(),
            name_de: "Linsensuppe".to_string(),
            name_tr: "Mercimek Çorbası".to_string(),
            category: RecipeCategory::Soup,
            prep_time: 30,
            image: Some(
                "https://images.unsplash.com/photo-1625937712842-061738bb1e2a?fm=jpg&q=85"
                    .to_string(),
            ),
            ingredients: strings(&["Rote Linsen", "Zwiebel", "Karotte", "Kartoffel", "Tomatenmark"]),
            instructions: "Alle Zutaten kochen und pürieren.".to_string(),
            is_favorite: true,
        },
        Recipe {
            id: "2".to_string(),
            name: "Baklava".to_string(),
            name_de: "Baklava".to_string(),
            name_tr: "Baklava".to_string(),
            category: RecipeCategory::Dessert,
            prep_time: 90,
            image: Some(
                "https://images.unsplash.com/photo-1761828122856-8703baac8e86?fm=jpg&q=85"
                    .to_string(),
            ),
            ingredients: strings(&["Filoteig", "Pistazien", "Butter", "Zucker", "Wasser"]),
            instructions: "Schichten, backen und mit Sirup übergießen.".to_string(),
            is_favorite: true,
        },
    ]
}

pub(super) fn shopping_items() -> Vec<ShoppingItem> {
    [
        ("1", "Rote Linsen", "500g", ShoppingCategory::Grains),
        ("2", "Zwiebeln", "1kg", ShoppingCategory::Fruits),
        ("3", "Hackfleisch", "500g", ShoppingCategory::Meat),
    ]
    .into_iter()
    .map(|(id, name, quantity, category)| ShoppingItem {
        id: id.to_string(),
        name: name.to_string(),
        quantity: quantity.to_string(),
        category,
        completed: false,
    })
    .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
