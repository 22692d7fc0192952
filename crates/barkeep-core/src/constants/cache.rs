// ABOUTME: Cache-related constants for catalog response TTL and capacity
// ABOUTME: The catalog is small and read-only, so entries live for hours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

/// Default maximum number of cached catalog responses
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1_000;

/// Recipe lookups and searches (6 hours) - catalog records are immutable
pub const TTL_RECIPE_SECS: u64 = 21_600;

/// Ingredient/category/glass lists (24 hours) - change only on catalog releases
pub const TTL_LIST_SECS: u64 = 86_400;
