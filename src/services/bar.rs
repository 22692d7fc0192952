// ABOUTME: Makeable-cocktail discovery from the user's owned ingredients
// ABOUTME: Unions per-ingredient catalog listings and records the resulting count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::collections::BTreeSet;

use barkeep_intelligence::filtering::{filter_drinks, unique_by_id};
use tracing::{info, instrument};

use crate::catalog::CatalogProvider;
use crate::errors::AppResult;
use crate::models::{DrinkFilter, Recipe, UserId};
use crate::preferences::PreferenceStore;

/// Drinks that use at least one of `owned`
///
/// One catalog listing per ingredient, concatenated in ingredient order and
/// de-duplicated by id (first occurrence wins). Results are summaries.
///
/// # Errors
///
/// Returns the first catalog failure
pub async fn makeable_for_ingredients(
    catalog: &dyn CatalogProvider,
    owned: &BTreeSet<String>,
) -> AppResult<Vec<Recipe>> {
    let mut drinks = Vec::new();
    for ingredient in owned {
        drinks.extend(catalog.list_recipes_by_ingredient(ingredient).await?);
    }
    Ok(unique_by_id(drinks))
}

/// Makeable drinks for `user`, storing their count as "available cocktails"
///
/// An empty bar yields no drinks and a count of zero.
///
/// # Errors
///
/// Returns the first catalog or store failure
#[instrument(skip_all, fields(user.id = %user))]
pub async fn makeable_cocktails(
    catalog: &dyn CatalogProvider,
    store: &dyn PreferenceStore,
    user: &UserId,
) -> AppResult<Vec<Recipe>> {
    let owned = store.get_owned_ingredients(user).await?;
    let drinks = makeable_for_ingredients(catalog, &owned).await?;
    store.set_available_cocktails(user, drinks.len()).await?;
    info!(owned = owned.len(), makeable = drinks.len(), "Computed makeable cocktails");
    Ok(drinks)
}

/// Full records for `drinks`, in the same order
///
/// Listing endpoints return summaries; filtering on category, glass,
/// alcoholic content, or ingredients needs the full record.
///
/// # Errors
///
/// Returns the first catalog failure
pub async fn hydrate(catalog: &dyn CatalogProvider, drinks: &[Recipe]) -> AppResult<Vec<Recipe>> {
    let mut full = Vec::with_capacity(drinks.len());
    for drink in drinks {
        full.push(catalog.get_recipe_by_id(&drink.id).await?);
    }
    Ok(full)
}

/// Makeable drinks narrowed and sorted by `filter`
///
/// Summaries are only hydrated when the filter restricts something.
///
/// # Errors
///
/// Returns the first catalog or store failure
#[instrument(skip_all, fields(user.id = %user))]
pub async fn filter_makeable(
    catalog: &dyn CatalogProvider,
    store: &dyn PreferenceStore,
    user: &UserId,
    filter: &DrinkFilter,
) -> AppResult<Vec<Recipe>> {
    let drinks = makeable_cocktails(catalog, store, user).await?;
    if filter.is_unrestricted() {
        return Ok(filter_drinks(&drinks, filter));
    }
    let full = hydrate(catalog, &drinks).await?;
    Ok(filter_drinks(&full, filter))
}
