// ABOUTME: Main library entry point for the Barkeep cocktail platform
// ABOUTME: Wires the catalog client, preference store, and services around the pure core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![deny(unsafe_code)]

//! # Barkeep
//!
//! Cocktail recommendations and home-bar tracking for a mobile front end.
//! Users record which ingredients they own, browse and search a public
//! cocktail catalog, see which cocktails they can make, keep favorites and
//! notes, and choose their measurement units.
//!
//! ## Architecture
//!
//! - **Core** (`barkeep-intelligence`): availability matching, measure
//!   scaling, and drink filtering as pure functions
//! - **Catalog**: read-only cocktail catalog behind [`catalog::CatalogProvider`]
//! - **Preferences**: per-user live documents behind
//!   [`preferences::PreferenceStore`]
//! - **Services**: orchestration feeding catalog and store values into the core
//! - **Session**: per-user context owning the collaborators and subscriptions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use barkeep::catalog::CocktailDbClient;
//! use barkeep::config::BarkeepConfig;
//! use barkeep::errors::AppResult;
//! use barkeep::models::UserId;
//! use barkeep::preferences::InMemoryPreferenceStore;
//! use barkeep::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = BarkeepConfig::from_env()?;
//!     let catalog = Arc::new(CocktailDbClient::new(config.catalog.clone())?);
//!     let store = Arc::new(InMemoryPreferenceStore::new());
//!     let session = Session::new(UserId::new("user-1"), catalog, store);
//!
//!     session.add_owned_ingredients(&["Vodka", "Lime juice"]).await?;
//!     let drinks = session.makeable_cocktails().await?;
//!     println!("{} cocktails ready to mix", drinks.len());
//!     Ok(())
//! }
//! ```

/// Bounded response cache with per-entry expiry
pub mod cache;

/// Read-only cocktail catalog: trait, HTTP client, and in-memory catalog
pub mod catalog;

/// Environment-based configuration
pub mod config;

/// Cancellable delayed tasks where the latest request wins
pub mod debounce;

/// Structured logging setup
pub mod logging;

/// Per-user preference store built on live documents
pub mod preferences;

/// Orchestration between the collaborators and the pure core
pub mod services;

/// Per-user session context
pub mod session;

pub use barkeep_core::{constants, errors, models};
pub use barkeep_intelligence as intelligence;
