// ABOUTME: Configuration module for the catalog client and search behaviour
// ABOUTME: Environment-only configuration with typed defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

/// Environment variable parsing and configuration types
pub mod environment;

pub use environment::{BarkeepConfig, CatalogCacheConfig, CatalogConfig, SearchConfig};
