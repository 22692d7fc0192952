// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the catalog, caching, units, and search behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single large file.

/// Cache-related constants (TTL, sizes)
pub mod cache;
/// Remote cocktail catalog endpoints and wire limits
pub mod catalog;
/// Measurement conversion constants
pub mod units;

/// Search and list presentation defaults
pub mod search {
    /// Trailing-edge delay applied to search-as-you-type input (milliseconds)
    pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
    /// Number of ingredients suggested when the picker query is empty
    pub const INGREDIENT_SAMPLE_SIZE: usize = 10;
    /// Number of random drinks shown before the user searches
    pub const DEFAULT_RANDOM_DRINKS: usize = 10;
    /// Number of drinks in the "just for you" recommendation list
    pub const DEFAULT_RECOMMENDATIONS: usize = 10;
}

/// Profile summary defaults
pub mod profile {
    /// Number of favorites shown as "latest favorites"
    pub const LATEST_FAVORITES: usize = 5;
}

/// Service names used in structured logging and error messages
pub mod service_names {
    /// Name of the library/application in logs
    pub const BARKEEP: &str = "barkeep";
    /// Name of the remote cocktail catalog
    pub const COCKTAIL_DB: &str = "TheCocktailDB";
    /// Name of the preference store
    pub const PREFERENCE_STORE: &str = "preference store";
}
