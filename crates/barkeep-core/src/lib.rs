// ABOUTME: Core types and constants for the Barkeep cocktail platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![deny(unsafe_code)]

//! # Barkeep Core
//!
//! Foundation crate providing shared types and constants for the Barkeep
//! cocktail platform. This crate changes infrequently so the rest of the
//! workspace benefits from incremental compilation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Catalog endpoints, cache defaults, and unit conversion factors
//! - **models**: Recipes, filters, user documents, and settings

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `DrinkFilter`, `UserDocument`, etc.)
pub mod models;
