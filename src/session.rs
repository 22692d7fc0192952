// ABOUTME: Per-user session owning the catalog, the preference store, and live subscriptions
// ABOUTME: Screens call services through the session and register watchers it keeps alive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! # Session
//!
//! A [`Session`] is created once the user is authenticated. It replaces
//! ambient global state: every collaborator and every live subscription a
//! screen relies on hangs off it, and [`Session::close`] (or dropping the
//! session) tears the subscriptions down.
//!
//! Watchers registered through the session hold a reference to the store.
//! The store in turn holds the watcher, so the cycle is broken only when the
//! session releases the subscription.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::catalog::CatalogProvider;
use crate::config::SearchConfig;
use crate::debounce::Debouncer;
use crate::errors::AppResult;
use crate::models::{DisplaySettings, DrinkFilter, DrinkNote, Recipe, TastePreferences, UnitSystem, UserId};
use crate::preferences::{Listener, PreferenceStore, Subscription};
use crate::services::recipe_card::{load_recipe_card, RecipeCard};
use crate::services::search::{search_drinks, suggest_ingredients, DrinkSearch};
use crate::services::taste::{save_taste, TasteField};
use crate::services::{bar, favorites, notes, recommendations};

/// Authenticated user's context
pub struct Session {
    user: UserId,
    catalog: Arc<dyn CatalogProvider>,
    store: Arc<dyn PreferenceStore>,
    config: SearchConfig,
    subscriptions: Mutex<Vec<Subscription>>,
}

impl Session {
    /// Session with default search settings
    #[must_use]
    pub fn new(user: UserId, catalog: Arc<dyn CatalogProvider>, store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_config(user, catalog, store, SearchConfig::default())
    }

    /// Session with explicit search settings
    #[must_use]
    pub fn with_config(
        user: UserId,
        catalog: Arc<dyn CatalogProvider>,
        store: Arc<dyn PreferenceStore>,
        config: SearchConfig,
    ) -> Self {
        info!(user.id = %user, "Session opened");
        Self {
            user,
            catalog,
            store,
            config,
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// The authenticated user
    #[must_use]
    pub const fn user(&self) -> &UserId {
        &self.user
    }

    /// Search settings in effect
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Shared catalog handle
    #[must_use]
    pub fn catalog(&self) -> Arc<dyn CatalogProvider> {
        Arc::clone(&self.catalog)
    }

    /// Shared store handle
    #[must_use]
    pub fn store(&self) -> Arc<dyn PreferenceStore> {
        Arc::clone(&self.store)
    }

    // ========================================================================
    // Bar
    // ========================================================================

    /// Add ingredients to the user's bar
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn add_owned_ingredients<S: AsRef<str> + Sync>(&self, ingredients: &[S]) -> AppResult<BTreeSet<String>> {
        let ingredients = ingredients.iter().map(|s| s.as_ref().to_owned()).collect();
        self.store.add_owned_ingredients(&self.user, ingredients).await
    }

    /// Remove one ingredient from the user's bar
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn remove_owned_ingredient(&self, ingredient: &str) -> AppResult<BTreeSet<String>> {
        self.store.remove_owned_ingredient(&self.user, ingredient).await
    }

    /// Ingredients the user owns
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn owned_ingredients(&self) -> AppResult<BTreeSet<String>> {
        self.store.get_owned_ingredients(&self.user).await
    }

    /// Drinks the user can make
    ///
    /// # Errors
    ///
    /// Returns the first catalog or store failure
    pub async fn makeable_cocktails(&self) -> AppResult<Vec<Recipe>> {
        bar::makeable_cocktails(self.catalog.as_ref(), self.store.as_ref(), &self.user).await
    }

    /// Makeable drinks narrowed and sorted by `filter`
    ///
    /// # Errors
    ///
    /// Returns the first catalog or store failure
    pub async fn filter_makeable(&self, filter: &DrinkFilter) -> AppResult<Vec<Recipe>> {
        bar::filter_makeable(self.catalog.as_ref(), self.store.as_ref(), &self.user, filter).await
    }

    // ========================================================================
    // Recipes and favorites
    // ========================================================================

    /// Recipe card for `recipe_id` scaled to `servings`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown recipe, or a collaborator failure
    pub async fn recipe_card(&self, recipe_id: &str, servings: u32) -> AppResult<RecipeCard> {
        load_recipe_card(self.catalog.as_ref(), self.store.as_ref(), &self.user, recipe_id, servings).await
    }

    /// Like or unlike a drink; returns whether it is now a favorite
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn toggle_favorite(&self, recipe_id: &str) -> AppResult<bool> {
        favorites::toggle_favorite(self.store.as_ref(), &self.user, recipe_id).await
    }

    /// Whether `recipe_id` is a favorite
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn is_favorite(&self, recipe_id: &str) -> AppResult<bool> {
        favorites::is_favorite(self.store.as_ref(), &self.user, recipe_id).await
    }

    /// Favorite drinks as full recipes
    ///
    /// # Errors
    ///
    /// Returns the first catalog or store failure
    pub async fn favorites(&self) -> AppResult<Vec<Recipe>> {
        favorites::list_favorites(self.catalog.as_ref(), self.store.as_ref(), &self.user).await
    }

    /// The most recently added favorites, newest first, capped at `limit`
    ///
    /// # Errors
    ///
    /// Returns a store or catalog failure
    pub async fn latest_favorites(&self, limit: usize) -> AppResult<Vec<Recipe>> {
        favorites::latest_favorites(self.catalog.as_ref(), self.store.as_ref(), &self.user, limit)
            .await
    }

    /// Favorites whose name matches `query`
    ///
    /// # Errors
    ///
    /// Returns the first catalog or store failure
    pub async fn search_favorites(&self, query: &str) -> AppResult<Vec<Recipe>> {
        favorites::search_favorites(self.catalog.as_ref(), self.store.as_ref(), &self.user, query).await
    }

    // ========================================================================
    // Notes
    // ========================================================================

    /// Annotate a drink
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for blank text, or the store failure
    pub async fn add_note(&self, recipe_id: &str, text: &str) -> AppResult<DrinkNote> {
        notes::add_note(self.store.as_ref(), &self.user, recipe_id, text).await
    }

    /// Delete a note by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown note, or the store failure
    pub async fn delete_note(&self, note_id: Uuid) -> AppResult<()> {
        notes::delete_note(self.store.as_ref(), &self.user, note_id).await
    }

    /// Notes on `recipe_id`, newest first
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn notes_for(&self, recipe_id: &str) -> AppResult<Vec<DrinkNote>> {
        notes::notes_for(self.store.as_ref(), &self.user, recipe_id).await
    }

    // ========================================================================
    // Preferences and settings
    // ========================================================================

    /// Save one onboarding answer
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn save_taste(&self, field: TasteField, values: Vec<String>) -> AppResult<TastePreferences> {
        save_taste(self.store.as_ref(), &self.user, field, values).await
    }

    /// "Just for you" drinks
    ///
    /// # Errors
    ///
    /// Returns the first catalog or store failure
    pub async fn recommendations(&self) -> AppResult<Vec<Recipe>> {
        let mut rng = StdRng::from_entropy();
        recommendations::recommend(
            self.catalog.as_ref(),
            self.store.as_ref(),
            &self.user,
            self.config.recommendation_count,
            &mut rng,
        )
        .await
    }

    /// Switch measurement units
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn set_unit_system(&self, units: UnitSystem) -> AppResult<()> {
        self.store.set_unit_system(&self.user, units).await
    }

    /// Toggle dark mode
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn set_dark_mode(&self, enabled: bool) -> AppResult<()> {
        self.store.set_dark_mode(&self.user, enabled).await
    }

    /// Change the display language
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn set_language(&self, language: &str) -> AppResult<()> {
        self.store.set_language(&self.user, language).await
    }

    /// Current display settings
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn settings(&self) -> AppResult<DisplaySettings> {
        self.store.get_settings(&self.user).await
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Drinks matching `query`, or random drinks for a blank query
    ///
    /// # Errors
    ///
    /// Returns the catalog failure
    pub async fn search(&self, query: &str) -> AppResult<Vec<Recipe>> {
        search_drinks(self.catalog.as_ref(), query, self.config.random_count).await
    }

    /// Ingredient picker suggestions
    ///
    /// # Errors
    ///
    /// Returns the catalog failure
    pub async fn suggest_ingredients(&self, query: &str) -> AppResult<Vec<String>> {
        suggest_ingredients(self.catalog.as_ref(), query).await
    }

    /// Search box with the session's debounce delay
    ///
    /// # Errors
    ///
    /// Returns an internal error outside a tokio runtime
    pub fn drink_search(&self) -> AppResult<DrinkSearch> {
        DrinkSearch::new(self.catalog(), &self.config)
    }

    // ========================================================================
    // Watchers
    // ========================================================================

    /// Recompute makeable drinks whenever the bar changes
    ///
    /// Rapid changes are debounced; only the latest bar's result reaches
    /// `listener`. Each result also updates the stored available count.
    ///
    /// # Errors
    ///
    /// Returns an internal error outside a tokio runtime, or the store failure
    #[instrument(skip_all, fields(user.id = %self.user))]
    pub async fn watch_makeable(&self, listener: Listener<AppResult<Vec<Recipe>>>) -> AppResult<()> {
        let debouncer = Arc::new(Debouncer::new(self.config.debounce())?);
        let catalog = Arc::clone(&self.catalog);
        let store = Arc::clone(&self.store);
        let user = self.user.clone();

        let on_change: Listener<BTreeSet<String>> = Arc::new(move |owned: &BTreeSet<String>| {
            let catalog = Arc::clone(&catalog);
            let store = Arc::clone(&store);
            let user = user.clone();
            let owned = owned.clone();
            let listener = Arc::clone(&listener);
            let _ = debouncer.schedule(
                async move {
                    let drinks = bar::makeable_for_ingredients(catalog.as_ref(), &owned).await?;
                    store.set_available_cocktails(&user, drinks.len()).await?;
                    Ok(drinks)
                },
                move |result: AppResult<Vec<Recipe>>| {
                    if let Err(error) = &result {
                        warn!(error = %error, "Makeable recomputation failed");
                    }
                    listener(&result);
                },
            );
        });

        let subscription = self.store.subscribe_owned_ingredients(&self.user, on_change).await?;
        self.track(subscription);
        Ok(())
    }

    /// Forward unit-system changes to `listener`
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn watch_unit_system(&self, listener: Listener<UnitSystem>) -> AppResult<()> {
        let subscription = self.store.subscribe_unit_system(&self.user, listener).await?;
        self.track(subscription);
        Ok(())
    }

    /// Forward available-cocktail count changes to `listener`
    ///
    /// # Errors
    ///
    /// Returns the store failure
    pub async fn watch_available_cocktails(&self, listener: Listener<usize>) -> AppResult<()> {
        let subscription = self.store.subscribe_available_cocktails(&self.user, listener).await?;
        self.track(subscription);
        Ok(())
    }

    /// Keep `subscription` alive until the session closes
    pub fn track(&self, subscription: Subscription) {
        self.subscriptions().push(subscription);
    }

    /// Number of live subscriptions held
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions().len()
    }

    /// Cancel every subscription the session holds
    pub fn close(&self) {
        let released: Vec<Subscription> = self.subscriptions().drain(..).collect();
        debug!(user.id = %self.user, released = released.len(), "Closing session subscriptions");
        drop(released);
    }

    fn subscriptions(&self) -> MutexGuard<'_, Vec<Subscription>> {
        self.subscriptions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}
