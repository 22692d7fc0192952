// ABOUTME: Availability matcher comparing recipe ingredients with the user's bar
// ABOUTME: Case-insensitive exact matching; no substring, plural, or synonym handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::collections::{BTreeSet, HashSet};

/// Case-folded view of an owned-ingredient set
///
/// Folding once up front keeps per-row lookups cheap when a recipe card
/// highlights each ingredient separately.
#[derive(Debug, Clone, Default)]
pub struct OwnedIngredients {
    folded: HashSet<String>,
}

impl OwnedIngredients {
    /// Fold an owned-ingredient snapshot, dropping blank names
    pub fn new<I, S>(owned: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            folded: owned
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .filter(|name| !name.trim().is_empty())
                .collect(),
        }
    }

    /// Whether `ingredient` is in the bar; a blank name never is
    #[must_use]
    pub fn contains(&self, ingredient: &str) -> bool {
        !ingredient.trim().is_empty() && self.folded.contains(&ingredient.to_lowercase())
    }

    /// Whether the bar is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

impl From<&BTreeSet<String>> for OwnedIngredients {
    fn from(owned: &BTreeSet<String>) -> Self {
        Self::new(owned)
    }
}

/// Whether a single ingredient is in the bar (case-insensitive, exact)
#[must_use]
pub fn is_available(ingredient: &str, owned: &BTreeSet<String>) -> bool {
    !ingredient.trim().is_empty()
        && owned
            .iter()
            .any(|name| name.to_lowercase() == ingredient.to_lowercase())
}

/// Recipe ingredients the user owns, in recipe order
///
/// Duplicated recipe entries are evaluated independently, so each may appear
/// in the result.
#[must_use]
pub fn compute_availability<S>(recipe_ingredients: &[S], owned: &BTreeSet<String>) -> Vec<S>
where
    S: AsRef<str> + Clone,
{
    if recipe_ingredients.is_empty() || owned.is_empty() {
        return Vec::new();
    }
    let owned = OwnedIngredients::from(owned);
    recipe_ingredients
        .iter()
        .filter(|name| owned.contains(name.as_ref()))
        .cloned()
        .collect()
}
