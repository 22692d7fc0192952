// ABOUTME: Recipe card: scaled, unit-converted ingredient rows with availability highlighting
// ABOUTME: Plus numbered preparation steps split from the instruction text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::collections::BTreeSet;

use barkeep_intelligence::availability::OwnedIngredients;
use barkeep_intelligence::instructions::split_steps;
use barkeep_intelligence::measurement::scale_measure;
use serde::Serialize;
use tracing::instrument;

use crate::catalog::CatalogProvider;
use crate::errors::AppResult;
use crate::models::{Recipe, UnitSystem, UserId};
use crate::preferences::PreferenceStore;

/// One ingredient line of a recipe card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRow {
    /// Ingredient name as the catalog spells it
    pub name: String,
    /// Measure scaled to the serving count and converted to the user's units
    pub measure: String,
    /// Whether the user owns this ingredient
    pub available: bool,
}

/// Everything the recipe screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeCard {
    /// The recipe
    pub recipe: Recipe,
    /// Serving count the measures are scaled to (at least one)
    pub servings: u32,
    /// Unit system the measures are expressed in
    pub units: UnitSystem,
    /// Ingredient rows in recipe order
    pub rows: Vec<IngredientRow>,
    /// Preparation steps; empty when the recipe has no instructions
    pub steps: Vec<String>,
}

impl RecipeCard {
    /// Build a card from values already at hand
    #[must_use]
    pub fn build(recipe: Recipe, servings: u32, units: UnitSystem, owned: &BTreeSet<String>) -> Self {
        let servings = servings.max(1);
        let bar = OwnedIngredients::from(owned);
        let rows = recipe
            .ingredients
            .iter()
            .map(|slot| IngredientRow {
                name: slot.name.clone(),
                measure: scale_measure(&slot.measure, servings, units),
                available: bar.contains(&slot.name),
            })
            .collect();
        let steps = split_steps(&recipe.instructions);

        Self {
            recipe,
            servings,
            units,
            rows,
            steps,
        }
    }

    /// Names of the ingredients the user still needs
    #[must_use]
    pub fn missing_ingredients(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| !row.available)
            .map(|row| row.name.as_str())
            .collect()
    }
}

/// Load `recipe_id` and build its card for `user`
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown recipe, or the first catalog
/// or store failure
#[instrument(skip_all, fields(user.id = %user, recipe.id = recipe_id, servings))]
pub async fn load_recipe_card(
    catalog: &dyn CatalogProvider,
    store: &dyn PreferenceStore,
    user: &UserId,
    recipe_id: &str,
    servings: u32,
) -> AppResult<RecipeCard> {
    let recipe = catalog.get_recipe_by_id(recipe_id).await?;
    let units = store.get_unit_system(user).await?;
    let owned = store.get_owned_ingredients(user).await?;
    Ok(RecipeCard::build(recipe, servings, units, &owned))
}
