// ABOUTME: TheCocktailDB endpoint paths, query keys, and record limits
// ABOUTME: Wire-level names live here so the client and tests agree on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

/// Public catalog base URL (API key is appended as a path segment)
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1";

/// Free developer key accepted by the public API
pub const DEFAULT_API_KEY: &str = "1";

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Maximum ingredient/measure slots on a catalog record
pub const MAX_INGREDIENT_SLOTS: usize = 15;

/// Sentinel the catalog returns in place of a drink list when a search misses
pub const NONE_FOUND_SENTINEL: &str = "None Found";

/// Endpoint paths
pub mod endpoints {
    /// Full recipe by id (`i=`)
    pub const LOOKUP: &str = "lookup.php";
    /// Recipe summaries by category (`c=`) or ingredient (`i=`)
    pub const FILTER: &str = "filter.php";
    /// Full recipes by name (`s=`)
    pub const SEARCH: &str = "search.php";
    /// Ingredient (`i=list`), category (`c=list`), or glass (`g=list`) lists
    pub const LIST: &str = "list.php";
    /// One random full recipe
    pub const RANDOM: &str = "random.php";
}
