// ABOUTME: Drink filter/sort engine applying a DrinkFilter to a list of recipes
// ABOUTME: Independent ANDed predicates followed by a stable case-insensitive name sort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::cmp::Reverse;
use std::collections::HashSet;

use barkeep_core::models::{DrinkFilter, Recipe, SortOrder};
use tracing::trace;

/// Filter and sort `drinks` according to `filter`
///
/// The input is never mutated; the result is a new list. Drinks with equal
/// names (ignoring case) keep their input order in both sort directions.
#[must_use]
pub fn filter_drinks(drinks: &[Recipe], filter: &DrinkFilter) -> Vec<Recipe> {
    let glass: Vec<String> = filter.glass.iter().map(|g| g.to_lowercase()).collect();

    let mut kept: Vec<Recipe> = drinks
        .iter()
        .filter(|drink| passes_alcoholic(drink, filter))
        .filter(|drink| filter.category.is_empty() || filter.category.contains(&drink.category))
        .filter(|drink| glass.is_empty() || glass.contains(&drink.glass.to_lowercase()))
        .filter(|drink| {
            filter.ingredients.is_empty() || matches_any_ingredient(drink, &filter.ingredients)
        })
        .cloned()
        .collect();

    sort_by_name(&mut kept, filter.sorting);
    trace!(input = drinks.len(), kept = kept.len(), "Filtered drinks");
    kept
}

/// Whether any non-empty ingredient slot of `drink` equals any of `names`
/// (case-insensitive)
///
/// A drink with no ingredients never matches.
#[must_use]
pub fn matches_any_ingredient<S: AsRef<str>>(drink: &Recipe, names: &[S]) -> bool {
    let wanted: HashSet<String> = names.iter().map(|n| n.as_ref().to_lowercase()).collect();
    drink
        .ingredient_names()
        .filter(|name| !name.is_empty())
        .any(|name| wanted.contains(&name.to_lowercase()))
}

/// Drop recipes whose id was already seen, keeping the first occurrence
#[must_use]
pub fn unique_by_id(recipes: impl IntoIterator<Item = Recipe>) -> Vec<Recipe> {
    let mut seen = HashSet::new();
    recipes
        .into_iter()
        .filter(|recipe| seen.insert(recipe.id.clone()))
        .collect()
}

fn passes_alcoholic(drink: &Recipe, filter: &DrinkFilter) -> bool {
    filter.alcoholic.is_empty()
        || drink
            .alcoholic
            .is_some_and(|content| filter.alcoholic.contains(&content))
}

fn sort_by_name(drinks: &mut [Recipe], order: SortOrder) {
    match order {
        SortOrder::Ascending => drinks.sort_by_cached_key(|drink| drink.name.to_lowercase()),
        SortOrder::Descending => {
            drinks.sort_by_cached_key(|drink| Reverse(drink.name.to_lowercase()));
        }
    }
}
