// ABOUTME: Cocktail intelligence engine: pure functions over catalog and preference values
// ABOUTME: Availability matching, measure scaling, drink filtering, and instruction parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![deny(unsafe_code)]

//! # Barkeep Intelligence
//!
//! Every function in this crate is synchronous, performs no I/O, and only
//! reads its arguments, so callers may invoke them from an event loop or from
//! any number of worker threads without coordination. The presentation layer
//! re-runs them whenever the owned-ingredient set, the favorites, the unit
//! system, or the filter specification changes.
//!
//! ## Example Usage
//!
//! ```rust
//! use barkeep_core::models::UnitSystem;
//! use barkeep_intelligence::measurement::scale_measure;
//!
//! assert_eq!(scale_measure("1 1/2 oz", 2, UnitSystem::Ml), "90 ml");
//! ```

/// Which recipe ingredients the user already owns
pub mod availability;
/// Multi-criteria drink filtering and name sorting
pub mod filtering;
/// Ingredient picker search and random suggestions
pub mod ingredient_search;
/// Splitting instruction blobs into numbered steps
pub mod instructions;
/// Scaling and unit conversion of textual measures
pub mod measurement;

pub use availability::{compute_availability, is_available, OwnedIngredients};
pub use filtering::{filter_drinks, matches_any_ingredient, unique_by_id};
pub use ingredient_search::{sample_ingredients, search_ingredients, suggest_ingredients};
pub use instructions::split_steps;
pub use measurement::{scale_measure, Conversion};
