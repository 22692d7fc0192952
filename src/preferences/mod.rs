// ABOUTME: Per-user preference store abstraction with live subscriptions
// ABOUTME: Owned ingredients, favorites, notes, taste preferences, settings, and counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! # Preference Store
//!
//! Each user has one document in the store. Reads return snapshots; writes
//! are pushed to every subscriber of the affected field. Subscriptions
//! deliver the current value immediately and stop when the returned
//! [`Subscription`] is dropped.
//!
//! The store persists what it is given. Validation (trimming notes,
//! rejecting duplicates) happens in [`crate::services`].

use std::collections::BTreeSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{
    DisplaySettings, DrinkNote, Favorite, TastePreferences, UnitSystem, UserDocument, UserId,
};

/// Live document primitive and subscription handles
pub mod live;
/// Preference store held in memory
pub mod memory;

pub use live::{Listener, LiveDocument, Subscription};
pub use memory::InMemoryPreferenceStore;

/// Per-user preference storage
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    // Owned ingredients
    /// Ingredients in the user's bar
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn get_owned_ingredients(&self, user: &UserId) -> AppResult<BTreeSet<String>>;

    /// Replace the user's bar; names are trimmed and blank names dropped
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn set_owned_ingredients(
        &self,
        user: &UserId,
        ingredients: BTreeSet<String>,
    ) -> AppResult<()>;

    /// Add ingredients (blank names ignored) and return the new bar
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn add_owned_ingredients(
        &self,
        user: &UserId,
        ingredients: Vec<String>,
    ) -> AppResult<BTreeSet<String>>;

    /// Remove one ingredient (exact name) and return the new bar
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn remove_owned_ingredient(
        &self,
        user: &UserId,
        ingredient: &str,
    ) -> AppResult<BTreeSet<String>>;

    /// Follow the user's bar
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn subscribe_owned_ingredients(
        &self,
        user: &UserId,
        listener: Listener<BTreeSet<String>>,
    ) -> AppResult<Subscription>;

    // Favorites
    /// Favorites in insertion order
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn get_favorites(&self, user: &UserId) -> AppResult<Vec<Favorite>>;

    /// Append a favorite; a recipe already favorited is left untouched
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn add_favorite(&self, user: &UserId, favorite: Favorite) -> AppResult<Vec<Favorite>>;

    /// Remove a favorite by recipe id
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn remove_favorite(&self, user: &UserId, recipe_id: &str) -> AppResult<Vec<Favorite>>;

    /// Follow the favorites
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn subscribe_favorites(
        &self,
        user: &UserId,
        listener: Listener<Vec<Favorite>>,
    ) -> AppResult<Subscription>;

    // Units
    /// Unit system for measures
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn get_unit_system(&self, user: &UserId) -> AppResult<UnitSystem>;

    /// Change the unit system
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn set_unit_system(&self, user: &UserId, units: UnitSystem) -> AppResult<()>;

    /// Follow the unit system; only actual changes are delivered
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn subscribe_unit_system(
        &self,
        user: &UserId,
        listener: Listener<UnitSystem>,
    ) -> AppResult<Subscription>;

    // Display settings
    /// Display settings
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn get_settings(&self, user: &UserId) -> AppResult<DisplaySettings>;

    /// Toggle dark mode
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn set_dark_mode(&self, user: &UserId, enabled: bool) -> AppResult<()>;

    /// Change the UI language
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn set_language(&self, user: &UserId, language: &str) -> AppResult<()>;

    /// Follow the display settings
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn subscribe_settings(
        &self,
        user: &UserId,
        listener: Listener<DisplaySettings>,
    ) -> AppResult<Subscription>;

    // Taste preferences
    /// Onboarding preferences
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn get_preferences(&self, user: &UserId) -> AppResult<TastePreferences>;

    /// Replace the onboarding preferences
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn set_preferences(&self, user: &UserId, preferences: TastePreferences) -> AppResult<()>;

    // Notes
    /// Notes in insertion order
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn get_notes(&self, user: &UserId) -> AppResult<Vec<DrinkNote>>;

    /// Store a note
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn add_note(&self, user: &UserId, note: DrinkNote) -> AppResult<()>;

    /// Delete a note
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no note has this id, or a storage
    /// error when the store is unreachable
    async fn delete_note(&self, user: &UserId, note_id: Uuid) -> AppResult<()>;

    /// Follow the notes
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn subscribe_notes(
        &self,
        user: &UserId,
        listener: Listener<Vec<DrinkNote>>,
    ) -> AppResult<Subscription>;

    // Available cocktail count
    /// Cocktails makeable with the owned ingredients, as last computed
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn get_available_cocktails(&self, user: &UserId) -> AppResult<usize>;

    /// Record the makeable cocktail count
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn set_available_cocktails(&self, user: &UserId, count: usize) -> AppResult<()>;

    /// Follow the makeable cocktail count
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn subscribe_available_cocktails(
        &self,
        user: &UserId,
        listener: Listener<usize>,
    ) -> AppResult<Subscription>;

    /// Snapshot of the whole user document
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store is unreachable
    async fn export_document(&self, user: &UserId) -> AppResult<UserDocument>;
}
