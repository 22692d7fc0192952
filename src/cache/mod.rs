// ABOUTME: Caching layer for catalog responses
// ABOUTME: LRU-bounded, time-limited in-memory cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

/// LRU cache with per-entry expiry
pub mod memory;

pub use memory::TtlCache;
