// ABOUTME: Core data models shared by the catalog, preference store, and algorithms
// ABOUTME: Re-exports recipe, filter, and per-user document types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

/// Drink filter specification and sort order
pub mod filter;
/// Cocktail recipes as fetched from the catalog
pub mod recipe;
/// Per-user documents: owned ingredients, favorites, notes, settings
pub mod user;

pub use filter::{DrinkFilter, SortOrder};
pub use recipe::{AlcoholicContent, Recipe, RecipeIngredient};
pub use user::{
    DisplaySettings, DrinkNote, Favorite, TastePreferences, UnitSystem, UserDocument, UserId,
};
