// ABOUTME: In-memory catalog implementing CatalogProvider over a fixed recipe list
// ABOUTME: Mirrors the remote catalog's summary/full-record split and supports outage simulation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use rand::seq::SliceRandom;

use super::CatalogProvider;
use crate::constants::service_names::COCKTAIL_DB;
use crate::errors::{AppError, AppResult};
use crate::models::Recipe;

/// Catalog backed by a recipe list held in memory
///
/// Category and ingredient listings return summaries, exactly like the
/// remote catalog, so callers exercise the same lookup paths.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    recipes: Vec<Recipe>,
    offline: AtomicBool,
}

impl InMemoryCatalog {
    /// Create a catalog holding `recipes`
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            offline: AtomicBool::new(false),
        }
    }

    /// Make every call fail with a retryable "unavailable" error
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> AppResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::external_unavailable(COCKTAIL_DB, "catalog is offline"));
        }
        Ok(())
    }

    fn summaries(&self, keep: impl Fn(&Recipe) -> bool) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| keep(recipe))
            .map(|recipe| Recipe::summary(&recipe.id, &recipe.name, recipe.thumbnail.clone()))
            .collect()
    }

    fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
        values
            .filter(|value| !value.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn get_recipe_by_id(&self, id: &str) -> AppResult<Recipe> {
        self.ensure_online()?;
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")).with_resource_id(id))
    }

    async fn list_recipes_by_category(&self, category: &str) -> AppResult<Vec<Recipe>> {
        self.ensure_online()?;
        Ok(self.summaries(|recipe| recipe.category == category))
    }

    async fn list_recipes_by_ingredient(&self, ingredient: &str) -> AppResult<Vec<Recipe>> {
        self.ensure_online()?;
        let wanted = ingredient.to_lowercase();
        Ok(self.summaries(|recipe| {
            recipe
                .ingredient_names()
                .any(|name| name.to_lowercase() == wanted)
        }))
    }

    async fn search_recipes_by_name(&self, text: &str) -> AppResult<Vec<Recipe>> {
        self.ensure_online()?;
        let needle = text.to_lowercase();
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| recipe.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn list_all_ingredients(&self) -> AppResult<Vec<String>> {
        self.ensure_online()?;
        Ok(Self::distinct(
            self.recipes
                .iter()
                .flat_map(|recipe| recipe.ingredient_names().map(str::to_owned)),
        ))
    }

    async fn list_all_categories(&self) -> AppResult<Vec<String>> {
        self.ensure_online()?;
        Ok(Self::distinct(
            self.recipes.iter().map(|recipe| recipe.category.clone()),
        ))
    }

    async fn list_all_glass_types(&self) -> AppResult<Vec<String>> {
        self.ensure_online()?;
        Ok(Self::distinct(
            self.recipes.iter().map(|recipe| recipe.glass.clone()),
        ))
    }

    async fn random_recipe(&self) -> AppResult<Recipe> {
        self.ensure_online()?;
        let pick = {
            let mut rng = rand::thread_rng();
            self.recipes.choose(&mut rng).cloned()
        };
        pick.ok_or_else(|| AppError::not_found("Random recipe"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::RecipeIngredient;

    fn catalog() -> InMemoryCatalog {
        let mut gin_tonic = Recipe::summary("1", "Gin Tonic", None).with_ingredients([
            RecipeIngredient::new("Gin", "2 oz"),
            RecipeIngredient::new("Tonic water", "4 oz"),
        ]);
        gin_tonic.category = "Cocktail".to_owned();
        gin_tonic.glass = "Highball glass".to_owned();
        InMemoryCatalog::new(vec![gin_tonic])
    }

    #[tokio::test]
    async fn test_listing_returns_summaries() {
        let listed = catalog().list_recipes_by_ingredient("gin").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].ingredients.is_empty());
    }

    #[tokio::test]
    async fn test_missing_recipe_is_not_found() {
        let error = catalog().get_recipe_by_id("404").await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.resource_id.as_deref(), Some("404"));
    }

    #[tokio::test]
    async fn test_offline_is_retryable() {
        let catalog = catalog();
        catalog.set_offline(true);
        let error = catalog.list_all_categories().await.unwrap_err();
        assert!(error.is_retryable());
    }

    #[tokio::test]
    async fn test_random_recipes_rejects_zero() {
        let error = catalog().random_recipes(0).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}
