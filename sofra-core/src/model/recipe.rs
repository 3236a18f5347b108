//! Recipe book entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SofraError;
use crate::model::{Language, empty_string_as_none};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeCategory {
    Soup,
    Main,
    Dessert,
    Salad,
    Drink,
}

impl RecipeCategory {
    pub const ALL: [RecipeCategory; 5] = [
        RecipeCategory::Soup,
        RecipeCategory::Main,
        RecipeCategory::Dessert,
        RecipeCategory::Salad,
        RecipeCategory::Drink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecipeCategory::Soup => "soup",
            RecipeCategory::Main => "main",
            RecipeCategory::Dessert => "dessert",
            RecipeCategory::Salad => "salad",
            RecipeCategory::Drink => "drink",
        }
    }
}

impl fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecipeCategory {
    type Err = SofraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| SofraError::InvalidValue {
                field: "recipe category",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(rename = "nameDE", default)]
    pub name_de: String,
    #[serde(rename = "nameTR", default)]
    pub name_tr: String,
    pub category: RecipeCategory,
    /// Minutes
    #[serde(default)]
    pub prep_time: u32,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub is_favorite: bool,
}

impl Recipe {
    /// Localized name, falling back to the canonical one.
    pub fn display_name(&self, language: Language) -> &str {
        let localized = match language {
            Language::De => &self.name_de,
            Language::Tr => &self.name_tr,
        };

        if localized.trim().is_empty() {
            &self.name
        } else {
            localized
        }
    }
}

/// Input for creating a recipe. Blank localized names default to `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub name_de: String,
    pub name_tr: String,
    pub category: RecipeCategory,
    pub prep_time: u32,
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub is_favorite: bool,
}

impl NewRecipe {
    pub fn new(name: impl Into<String>, category: RecipeCategory) -> Self {
        NewRecipe {
            name: name.into(),
            name_de: String::new(),
            name_tr: String::new(),
            category,
            prep_time: 30,
            image: None,
            ingredients: Vec::new(),
            instructions: String::new(),
            is_favorite: false,
        }
    }

    pub(crate) fn into_recipe(self, id: String) -> Recipe {
        let name = self.name.trim().to_string();
        let or_name = |localized: String| {
            if localized.trim().is_empty() {
                name.clone()
            } else {
                localized.trim().to_string()
            }
        };
        let name_de = or_name(self.name_de);
        let name_tr = or_name(self.name_tr);

        Recipe {
            id,
            name,
            name_de,
            name_tr,
            category: self.category,
            prep_time: self.prep_time,
            image: self.image.filter(|url| !url.trim().is_empty()),
            ingredients: self
                .ingredients
                .into_iter()
                .map(|i| i.trim().to_string())
                .filter(|i| !i.is_empty())
                .collect(),
            instructions: self.instructions,
            is_favorite: self.is_favorite,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub name: Option<String>,
    pub name_de: Option<String>,
    pub name_tr: Option<String>,
    pub category: Option<RecipeCategory>,
    pub prep_time: Option<u32>,
    pub image: Option<Option<String>>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub is_favorite: Option<bool>,
}

impl RecipePatch {
    pub fn apply(self, recipe: &mut Recipe) {
        if let Some(name) = self.name {
            recipe.name = name.trim().to_string();
        }
        if let Some(name_de) = self.name_de {
            recipe.name_de = name_de;
        }
        if let Some(name_tr) = self.name_tr {
            recipe.name_tr = name_tr;
        }
        if let Some(category) = self.category {
            recipe.category = category;
        }
        if let Some(prep_time) = self.prep_time {
            recipe.prep_time = prep_time;
        }
        if let Some(image) = self.image {
            recipe.image = image;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions {
            recipe.instructions = instructions;
        }
        if let Some(is_favorite) = self.is_favorite {
            recipe.is_favorite = is_favorite;
        }
    }
}

/// Which recipes to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecipeFilter {
    #[default]
    All,
    Favorites,
    Category(RecipeCategory),
}

impl RecipeFilter {
    pub fn matches(self, recipe: &Recipe) -> bool {
        match self {
            RecipeFilter::All => true,
            RecipeFilter::Favorites => recipe.is_favorite,
            RecipeFilter::Category(category) => recipe.category == category,
        }
    }
}

impl FromStr for RecipeFilter {
    type Err = SofraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(RecipeFilter::All),
            "favorites" | "favourites" => Ok(RecipeFilter::Favorites),
            other => other.parse().map(RecipeFilter::Category).map_err(|_| {
                SofraError::InvalidValue {
                    field: "recipe filter",
                    value: s.to_string(),
                }
            }),
        }
    }
}
