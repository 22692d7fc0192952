// ABOUTME: Orchestration between the catalog, the preference store, and the pure core
// ABOUTME: Each service loads collaborator values, calls barkeep-intelligence, and writes back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Services are free async functions over `&dyn CatalogProvider` and
//! `&dyn PreferenceStore` so they can run inside spawned tasks as easily as
//! from a [`Session`](crate::session::Session).

/// Makeable cocktails and the user's bar
pub mod bar;
/// Favorite drinks
pub mod favorites;
/// Drink notes
pub mod notes;
/// Recipe card assembly
pub mod recipe_card;
/// "Just for you" recommendations
pub mod recommendations;
/// Drink search and ingredient picker
pub mod search;
/// Onboarding taste preferences
pub mod taste;
