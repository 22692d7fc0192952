// ABOUTME: Filter specification for browsing drinks
// ABOUTME: Five independent axes: sort order, alcoholic content, category, glass, ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use serde::{Deserialize, Serialize};

use super::recipe::AlcoholicContent;

/// Sort direction applied to drink names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// A to Z
    #[default]
    Ascending,
    /// Z to A
    Descending,
}

impl SortOrder {
    /// The opposite direction (the filter screen's sort toggle)
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// User-selected narrowing and sorting criteria
///
/// An empty list on any axis means "no restriction". Axes are ANDed
/// together; within the ingredient axis a drink passes when it contains
/// any of the listed ingredients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrinkFilter {
    /// Sort direction by display name
    pub sorting: SortOrder,
    /// Allowed alcoholic classifications
    pub alcoholic: Vec<AlcoholicContent>,
    /// Allowed categories (exact match)
    pub category: Vec<String>,
    /// Allowed glass types (case-insensitive)
    pub glass: Vec<String>,
    /// Ingredients of which at least one must appear (case-insensitive)
    pub ingredients: Vec<String>,
}

impl DrinkFilter {
    /// Whether no axis restricts the list
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.alcoholic.is_empty()
            && self.category.is_empty()
            && self.glass.is_empty()
            && self.ingredients.is_empty()
    }

    /// Add or remove an alcoholic classification
    pub fn toggle_alcoholic(&mut self, content: AlcoholicContent) {
        toggle(&mut self.alcoholic, content);
    }

    /// Add or remove a category
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.category, category.to_owned());
    }

    /// Reset every axis to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}
