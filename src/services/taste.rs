// ABOUTME: Onboarding taste preferences saved one screen at a time
// ABOUTME: Each save replaces one list and keeps the others
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::collections::HashSet;

use tracing::debug;

use crate::errors::AppResult;
use crate::models::{TastePreferences, UserId};
use crate::preferences::PreferenceStore;

/// Which onboarding list to replace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TasteField {
    /// Preferred drink categories
    Drinks,
    /// Preferred ingredients
    Ingredients,
    /// Ingredients to avoid
    Allergies,
}

/// Replace one list of the user's taste preferences, keeping the rest
///
/// Blank entries are dropped and duplicates collapsed, first spelling wins.
///
/// # Errors
///
/// Returns a store failure
pub async fn save_taste(
    store: &dyn PreferenceStore,
    user: &UserId,
    field: TasteField,
    values: Vec<String>,
) -> AppResult<TastePreferences> {
    let mut values: Vec<String> = values
        .into_iter()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .collect();
    let mut seen = HashSet::new();
    values.retain(|v| seen.insert(v.to_lowercase()));

    let mut preferences = store.get_preferences(user).await?;
    match field {
        TasteField::Drinks => preferences.drinks = values,
        TasteField::Ingredients => preferences.ingredients = values,
        TasteField::Allergies => preferences.allergies = values,
    }
    debug!(user.id = %user, ?field, "Saving taste preferences");
    store.set_preferences(user, preferences.clone()).await?;
    Ok(preferences)
}
