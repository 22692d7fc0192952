// ABOUTME: Ingredient picker search over the catalog's ingredient list
// ABOUTME: Case-insensitive substring search with a random sample for empty queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use barkeep_core::constants::search::INGREDIENT_SAMPLE_SIZE;
use rand::seq::SliceRandom;
use rand::Rng;

/// Ingredients whose name contains `query` (case-insensitive), in list order
#[must_use]
pub fn search_ingredients<'a>(all: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.trim().to_lowercase();
    all.iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

/// Up to `count` distinct ingredients picked at random
pub fn sample_ingredients<'a, R: Rng + ?Sized>(
    all: &'a [String],
    count: usize,
    rng: &mut R,
) -> Vec<&'a str> {
    all.choose_multiple(rng, count).map(String::as_str).collect()
}

/// Picker suggestions for `query`
///
/// A blank query suggests a random sample instead of the whole list.
pub fn suggest_ingredients<'a, R: Rng + ?Sized>(
    all: &'a [String],
    query: &str,
    rng: &mut R,
) -> Vec<&'a str> {
    if query.trim().is_empty() {
        sample_ingredients(all, INGREDIENT_SAMPLE_SIZE, rng)
    } else {
        search_ingredients(all, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Vec<String> {
        ["Light rum", "Dark rum", "Vodka", "Lime juice", "Lemon juice", "Gin"]
            .iter()
            .map(|s| (*s).to_owned())
            .collect()
    }

    #[test]
    fn test_substring_search_ignores_case() {
        let all = catalog();
        assert_eq!(search_ingredients(&all, "RUM"), vec!["Light rum", "Dark rum"]);
        assert_eq!(search_ingredients(&all, " juice "), vec!["Lime juice", "Lemon juice"]);
    }

    #[test]
    fn test_blank_query_samples() {
        let all = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = suggest_ingredients(&all, "  ", &mut rng);
        assert_eq!(picked.len(), all.len().min(INGREDIENT_SAMPLE_SIZE));
        assert!(picked.iter().all(|p| all.iter().any(|a| a == p)));
    }
}
