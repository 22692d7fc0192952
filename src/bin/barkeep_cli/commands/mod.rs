// ABOUTME: Subcommand handlers for barkeep-cli
// ABOUTME: Each handler calls the library services and prints through the display helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::collections::BTreeSet;
use std::sync::Arc;

use barkeep::catalog::{CatalogProvider, CocktailDbClient};
use barkeep::config::BarkeepConfig;
use barkeep::errors::AppResult;
use barkeep::models::{DrinkFilter, SortOrder, UnitSystem, UserId};
use barkeep::preferences::InMemoryPreferenceStore;
use barkeep::services::recipe_card::RecipeCard;
use barkeep::services::search::{search_drinks, suggest_ingredients};
use barkeep::session::Session;

use crate::helpers::display;

/// Local user for one-shot CLI runs
const CLI_USER: &str = "cli";

pub async fn search(catalog: &CocktailDbClient, query: &str, random_count: usize) -> AppResult<()> {
    let drinks = search_drinks(catalog, query, random_count).await?;
    if query.trim().is_empty() {
        println!("Random drinks:");
    } else {
        println!("Drinks matching '{query}':");
    }
    display::print_drinks(&drinks);
    Ok(())
}

pub async fn show(
    catalog: &CocktailDbClient,
    id: &str,
    servings: u32,
    units: UnitSystem,
    owned: Vec<String>,
) -> AppResult<()> {
    let recipe = catalog.get_recipe_by_id(id).await?;
    let owned: BTreeSet<String> = owned.into_iter().collect();
    let card = RecipeCard::build(recipe, servings, units, &owned);
    display::print_recipe_card(&card, !owned.is_empty());
    Ok(())
}

pub async fn makeable(
    catalog: CocktailDbClient,
    config: &BarkeepConfig,
    ingredients: &[String],
    category: Vec<String>,
    glass: Vec<String>,
    descending: bool,
) -> AppResult<()> {
    let session = Session::with_config(
        UserId::new(CLI_USER),
        Arc::new(catalog),
        Arc::new(InMemoryPreferenceStore::new()),
        config.search.clone(),
    );
    let owned = session.add_owned_ingredients(ingredients).await?;

    let filter = DrinkFilter {
        sorting: if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        },
        category,
        glass,
        ..DrinkFilter::default()
    };
    let drinks = session.filter_makeable(&filter).await?;

    println!(
        "{} drinks use at least one of: {}",
        drinks.len(),
        owned.iter().cloned().collect::<Vec<_>>().join(", ")
    );
    display::print_drinks(&drinks);
    Ok(())
}

pub async fn ingredients(catalog: &CocktailDbClient, query: &str) -> AppResult<()> {
    let suggestions = suggest_ingredients(catalog, query).await?;
    if suggestions.is_empty() {
        println!("No ingredients match '{query}'");
        return Ok(());
    }
    for name in suggestions {
        println!("  {name}");
    }
    Ok(())
}
