// ABOUTME: "Just for you" recommendations from the user's preferred categories
// ABOUTME: Picks a random preferred category and drops drinks containing allergens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use barkeep_intelligence::filtering::matches_any_ingredient;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::catalog::CatalogProvider;
use crate::errors::AppResult;
use crate::models::{Recipe, UserId};
use crate::preferences::PreferenceStore;

/// Up to `count` full recipes from one randomly chosen preferred category
///
/// Drinks containing any allergy ingredient (case-insensitive) are skipped.
/// No preferred category means no recommendations.
///
/// # Errors
///
/// Returns the first catalog or store failure
#[instrument(skip_all, fields(user.id = %user, count))]
pub async fn recommend<R>(
    catalog: &dyn CatalogProvider,
    store: &dyn PreferenceStore,
    user: &UserId,
    count: usize,
    rng: &mut R,
) -> AppResult<Vec<Recipe>>
where
    R: Rng + Send + ?Sized,
{
    let preferences = store.get_preferences(user).await?;
    let Some(category) = preferences.drinks.choose(rng).cloned() else {
        debug!("No preferred categories; nothing to recommend");
        return Ok(Vec::new());
    };

    let candidates = catalog.list_recipes_by_category(&category).await?;
    let mut picked = Vec::with_capacity(count.min(candidates.len()));
    for summary in candidates {
        if picked.len() >= count {
            break;
        }
        let recipe = catalog.get_recipe_by_id(&summary.id).await?;
        if matches_any_ingredient(&recipe, &preferences.allergies) {
            debug!(recipe.id = %recipe.id, "Skipping drink with allergen");
            continue;
        }
        picked.push(recipe);
    }

    info!(%category, recommended = picked.len(), "Built recommendations");
    Ok(picked)
}
