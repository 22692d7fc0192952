// ABOUTME: Favorite drinks: like/unlike toggling, listing, and name search within favorites
// ABOUTME: Search intersects favorites with catalog name-search results, keeping favorite order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, instrument, warn};

use crate::catalog::CatalogProvider;
use crate::errors::{AppResult, ErrorCode};
use crate::models::{Favorite, Recipe, UserId};
use crate::preferences::PreferenceStore;

/// Favorite or unfavorite `recipe_id`; returns whether it is now a favorite
///
/// # Errors
///
/// Returns a store failure
#[instrument(skip_all, fields(user.id = %user, recipe.id = recipe_id))]
pub async fn toggle_favorite(
    store: &dyn PreferenceStore,
    user: &UserId,
    recipe_id: &str,
) -> AppResult<bool> {
    let favorites = store.get_favorites(user).await?;
    if favorites.iter().any(|f| f.recipe_id == recipe_id) {
        store.remove_favorite(user, recipe_id).await?;
        debug!("Unfavorited");
        return Ok(false);
    }
    store
        .add_favorite(
            user,
            Favorite {
                recipe_id: recipe_id.to_owned(),
                added_at: Utc::now(),
            },
        )
        .await?;
    debug!("Favorited");
    Ok(true)
}

/// Whether `recipe_id` is a favorite
///
/// # Errors
///
/// Returns a store failure
pub async fn is_favorite(
    store: &dyn PreferenceStore,
    user: &UserId,
    recipe_id: &str,
) -> AppResult<bool> {
    Ok(store
        .get_favorites(user)
        .await?
        .iter()
        .any(|f| f.recipe_id == recipe_id))
}

/// Full records of every favorite, in favorite order
///
/// Favorites the catalog no longer knows are skipped.
///
/// # Errors
///
/// Returns a store failure or a catalog failure other than "not found"
#[instrument(skip_all, fields(user.id = %user))]
pub async fn list_favorites(
    catalog: &dyn CatalogProvider,
    store: &dyn PreferenceStore,
    user: &UserId,
) -> AppResult<Vec<Recipe>> {
    let favorites = store.get_favorites(user).await?;
    hydrate_favorites(catalog, &favorites).await
}

/// The `limit` most recently added favorites, newest first
///
/// Favorites added at the same instant keep their stored order.
///
/// # Errors
///
/// Returns a store failure or a catalog failure other than "not found"
#[instrument(skip_all, fields(user.id = %user, limit))]
pub async fn latest_favorites(
    catalog: &dyn CatalogProvider,
    store: &dyn PreferenceStore,
    user: &UserId,
    limit: usize,
) -> AppResult<Vec<Recipe>> {
    let mut favorites = store.get_favorites(user).await?;
    favorites.sort_by_key(|favorite| Reverse(favorite.added_at));
    favorites.truncate(limit);
    hydrate_favorites(catalog, &favorites).await
}

async fn hydrate_favorites(
    catalog: &dyn CatalogProvider,
    favorites: &[Favorite],
) -> AppResult<Vec<Recipe>> {
    let mut recipes = Vec::with_capacity(favorites.len());
    for favorite in favorites {
        match catalog.get_recipe_by_id(&favorite.recipe_id).await {
            Ok(recipe) => recipes.push(recipe),
            Err(e) if e.code == ErrorCode::ResourceNotFound => {
                warn!(recipe.id = %favorite.recipe_id, "Favorite no longer in catalog");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(recipes)
}

/// Favorites whose name matches `query` according to the catalog's name search
///
/// A blank query lists every favorite.
///
/// # Errors
///
/// Returns the first catalog or store failure
#[instrument(skip_all, fields(user.id = %user, query))]
pub async fn search_favorites(
    catalog: &dyn CatalogProvider,
    store: &dyn PreferenceStore,
    user: &UserId,
    query: &str,
) -> AppResult<Vec<Recipe>> {
    let query = query.trim();
    if query.is_empty() {
        return list_favorites(catalog, store, user).await;
    }

    let mut matches: HashMap<String, Recipe> = catalog
        .search_recipes_by_name(query)
        .await?
        .into_iter()
        .map(|recipe| (recipe.id.clone(), recipe))
        .collect();

    Ok(store
        .get_favorites(user)
        .await?
        .iter()
        .filter_map(|favorite| matches.remove(&favorite.recipe_id))
        .collect())
}
