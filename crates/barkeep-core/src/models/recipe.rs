// ABOUTME: Cocktail recipe model with a fixed, ordered ingredient list
// ABOUTME: Built once at the catalog boundary and never mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::catalog::MAX_INGREDIENT_SLOTS;

/// Alcoholic-content classification of a drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlcoholicContent {
    /// Contains alcohol
    #[serde(rename = "Alcoholic")]
    Alcoholic,
    /// Alcohol free
    #[serde(rename = "Non alcoholic")]
    NonAlcoholic,
    /// Alcohol may be added or left out
    #[serde(rename = "Optional alcohol")]
    OptionalAlcohol,
}

impl AlcoholicContent {
    /// Every classification, in the order the filter screen lists them
    pub const ALL: [Self; 3] = [Self::Alcoholic, Self::NonAlcoholic, Self::OptionalAlcohol];

    /// Catalog label for this classification
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alcoholic => "Alcoholic",
            Self::NonAlcoholic => "Non alcoholic",
            Self::OptionalAlcohol => "Optional alcohol",
        }
    }

    /// Parse a catalog label (exact match)
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for AlcoholicContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ingredient slot of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name as the catalog spells it
    pub name: String,
    /// Free-form measure text, empty when the catalog gives none
    pub measure: String,
}

impl RecipeIngredient {
    /// Create an ingredient slot
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.into(),
        }
    }
}

/// A cocktail record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Category such as "Cocktail" or "Ordinary Drink"
    pub category: String,
    /// Alcoholic-content classification, when the catalog provides one
    pub alcoholic: Option<AlcoholicContent>,
    /// Glass type (free-form)
    pub glass: String,
    /// Ordered ingredient slots; never more than [`MAX_INGREDIENT_SLOTS`]
    pub ingredients: Vec<RecipeIngredient>,
    /// Preparation instructions as one text blob
    pub instructions: String,
    /// Thumbnail URL
    pub thumbnail: Option<String>,
}

impl Recipe {
    /// Create a recipe with only identity fields set
    ///
    /// Catalog list endpoints (by category, by ingredient) return summaries
    /// carrying just the id, name, and thumbnail.
    pub fn summary(
        id: impl Into<String>,
        name: impl Into<String>,
        thumbnail: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            alcoholic: None,
            glass: String::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
            thumbnail,
        }
    }

    /// Replace the ingredient slots
    ///
    /// Slots with a blank name are dropped and the list is truncated to
    /// [`MAX_INGREDIENT_SLOTS`].
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: impl IntoIterator<Item = RecipeIngredient>) -> Self {
        self.ingredients = ingredients
            .into_iter()
            .filter(|slot| !slot.name.trim().is_empty())
            .take(MAX_INGREDIENT_SLOTS)
            .collect();
        self
    }

    /// Ingredient names in slot order
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|slot| slot.name.as_str())
    }
}
