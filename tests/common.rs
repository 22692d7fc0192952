// ABOUTME: Shared fixtures for integration tests
// ABOUTME: A small in-memory cocktail catalog, a preference store, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `barkeep`

use std::env;
use std::sync::{Arc, Mutex, Once};

use barkeep::catalog::InMemoryCatalog;
use barkeep::models::{AlcoholicContent, Recipe, RecipeIngredient, UserId};
use barkeep::preferences::{InMemoryPreferenceStore, Listener};
use barkeep::session::Session;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

pub fn user() -> UserId {
    UserId::new("user-1")
}

fn recipe(
    id: &str,
    name: &str,
    category: &str,
    alcoholic: AlcoholicContent,
    glass: &str,
    ingredients: &[(&str, &str)],
    instructions: &str,
) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        category: category.to_owned(),
        alcoholic: Some(alcoholic),
        glass: glass.to_owned(),
        ingredients: Vec::new(),
        instructions: instructions.to_owned(),
        thumbnail: Some(format!("https://img.example/{id}.jpg")),
    }
    .with_ingredients(
        ingredients
            .iter()
            .map(|(name, measure)| RecipeIngredient::new(*name, *measure)),
    )
}

/// Five drinks covering every filter axis
pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        recipe(
            "11007",
            "Margarita",
            "Ordinary Drink",
            AlcoholicContent::Alcoholic,
            "Cocktail glass",
            &[
                ("Tequila", "1 1/2 oz"),
                ("Triple sec", "1/2 oz"),
                ("Lime juice", "1 oz"),
                ("Salt", ""),
            ],
            "Rub the rim of the glass with the lime slice. Dip the rim in salt. \
             Shake the other ingredients with ice. Strain into the glass.",
        ),
        recipe(
            "11000",
            "Mojito",
            "Cocktail",
            AlcoholicContent::Alcoholic,
            "Highball glass",
            &[
                ("Light rum", "2-3 oz"),
                ("Lime", "Juice of 1"),
                ("Sugar", "2 tsp"),
                ("Mint", "2-4"),
                ("Soda water", ""),
            ],
            "Muddle mint leaves with sugar and lime juice. Add rum and top with soda water.",
        ),
        recipe(
            "12560",
            "Afterglow",
            "Cocktail",
            AlcoholicContent::NonAlcoholic,
            "Highball Glass",
            &[
                ("Grenadine", "1 part"),
                ("Orange juice", "4 parts"),
                ("Pineapple juice", "4 parts"),
            ],
            "Mix. Serve over ice.",
        ),
        recipe(
            "11001",
            "Old Fashioned",
            "Cocktail",
            AlcoholicContent::Alcoholic,
            "Old-fashioned glass",
            &[
                ("Bourbon", "4.5 cl"),
                ("Angostura bitters", "2 dashes"),
                ("Sugar", "1 cube"),
                ("Water", "dash"),
            ],
            "",
        ),
        recipe(
            "17222",
            "A1",
            "Cocktail",
            AlcoholicContent::Alcoholic,
            "Cocktail glass",
            &[
                ("Gin", "1 3/4 shot"),
                ("Grand Marnier", "1 Shot"),
                ("Lemon Juice", "1/4 Shot"),
                ("Grenadine", "1/8 Shot"),
            ],
            "Pour all ingredients into a cocktail shaker, mix and serve over ice into a chilled glass.",
        ),
    ]
}

pub fn catalog() -> Arc<InMemoryCatalog> {
    init_test_logging();
    Arc::new(InMemoryCatalog::new(sample_recipes()))
}

pub fn store() -> Arc<InMemoryPreferenceStore> {
    init_test_logging();
    Arc::new(InMemoryPreferenceStore::new())
}

/// Session over fresh fixtures, returning the concrete collaborators too
pub fn session() -> (Session, Arc<InMemoryCatalog>, Arc<InMemoryPreferenceStore>) {
    let catalog = catalog();
    let store = store();
    let session = Session::new(user(), catalog.clone(), store.clone());
    (session, catalog, store)
}

/// Listener that records every delivered value
pub fn recorder<T: Clone + Send + 'static>() -> (Arc<Mutex<Vec<T>>>, Listener<T>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let listener: Listener<T> = Arc::new(move |value: &T| sink.lock().unwrap().push(value.clone()));
    (seen, listener)
}

pub fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|recipe| recipe.id.as_str()).collect()
}
