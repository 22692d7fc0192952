// ABOUTME: Integration tests for the catalog wire mapping and the in-memory catalog
// ABOUTME: Real-shaped TheCocktailDB payloads, summaries versus full records, random draws
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use barkeep::catalog::wire::{parse_records, CategoryEntry, DrinkRecord, GlassEntry, IngredientEntry};
use barkeep::catalog::{CatalogProvider, CocktailDbClient};
use barkeep::config::CatalogConfig;
use barkeep::errors::ErrorCode;
use barkeep::models::{AlcoholicContent, Recipe, RecipeIngredient};

use common::{catalog, ids};

const MARGARITA_LOOKUP: &str = r#"{
  "drinks": [{
    "idDrink": "11007",
    "strDrink": "Margarita",
    "strCategory": "Ordinary Drink",
    "strAlcoholic": "Alcoholic",
    "strGlass": "Cocktail glass",
    "strInstructions": "Rub the rim of the glass with the lime slice to make the salt stick to it. Take care to moisten only the outer rim and sprinkle the salt on it.",
    "strDrinkThumb": "https://www.thecocktaildb.com/images/media/drink/5noda61589575158.jpg",
    "strIngredient1": "Tequila",
    "strIngredient2": "Triple sec",
    "strIngredient3": "Lime juice",
    "strIngredient4": "Salt",
    "strIngredient5": null,
    "strIngredient6": null,
    "strMeasure1": "1 1/2 oz ",
    "strMeasure2": "1/2 oz ",
    "strMeasure3": "1 oz ",
    "strMeasure4": null,
    "strMeasure5": null,
    "strTags": "IBA,ContemporaryClassic",
    "dateModified": "2015-08-18 14:42:59"
  }]
}"#;

#[test]
fn test_full_record_maps_to_recipe() {
    let records: Vec<DrinkRecord> = parse_records(MARGARITA_LOOKUP).unwrap();
    let recipe: Recipe = records.into_iter().next().unwrap().into();

    assert_eq!(recipe.id, "11007");
    assert_eq!(recipe.category, "Ordinary Drink");
    assert_eq!(recipe.alcoholic, Some(AlcoholicContent::Alcoholic));
    assert_eq!(recipe.glass, "Cocktail glass");
    assert_eq!(
        recipe.ingredients,
        vec![
            RecipeIngredient::new("Tequila", "1 1/2 oz"),
            RecipeIngredient::new("Triple sec", "1/2 oz"),
            RecipeIngredient::new("Lime juice", "1 oz"),
            RecipeIngredient::new("Salt", ""),
        ]
    );
    assert!(recipe.thumbnail.is_some());
}

#[test]
fn test_filter_listing_maps_to_summaries() {
    let body = r#"{"drinks":[
        {"strDrink":"155 Belmont","strDrinkThumb":"https://img.example/yqvvqs1475667388.jpg","idDrink":"15346"},
        {"strDrink":"57 Chevy with a White License Plate","strDrinkThumb":"https://img.example/qyyvtu1468878544.jpg","idDrink":"14029"}
    ]}"#;
    let recipes: Vec<Recipe> = parse_records::<DrinkRecord>(body)
        .unwrap()
        .into_iter()
        .map(Recipe::from)
        .collect();

    assert_eq!(ids(&recipes), vec!["15346", "14029"]);
    assert!(recipes.iter().all(|r| r.ingredients.is_empty() && r.alcoholic.is_none()));
}

#[test]
fn test_empty_results_in_every_shape() {
    for body in [r#"{"drinks":null}"#, r#"{"drinks":"None Found"}"#, r#"{"drinks":[]}"#, "{}"] {
        assert!(parse_records::<DrinkRecord>(body).unwrap().is_empty(), "{body}");
    }
}

#[test]
fn test_name_lists() {
    let ingredients: Vec<IngredientEntry> =
        parse_records(r#"{"drinks":[{"strIngredient1":"Light rum"},{"strIngredient1":"Applejack"}]}"#).unwrap();
    let categories: Vec<CategoryEntry> =
        parse_records(r#"{"drinks":[{"strCategory":"Ordinary Drink"},{"strCategory":"Cocktail"}]}"#).unwrap();
    let glasses: Vec<GlassEntry> =
        parse_records(r#"{"drinks":[{"strGlass":"Highball glass"}]}"#).unwrap();

    assert_eq!(ingredients[1].name, "Applejack");
    assert_eq!(categories[0].name, "Ordinary Drink");
    assert_eq!(glasses[0].name, "Highball glass");
}

#[test]
fn test_html_error_page_is_serialization_error() {
    let error = parse_records::<DrinkRecord>("<html>502 Bad Gateway</html>").unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_in_memory_catalog_lists() {
    let catalog = catalog();

    let cocktails = catalog.list_recipes_by_category("Cocktail").await.unwrap();
    assert_eq!(ids(&cocktails), vec!["11000", "12560", "11001", "17222"]);

    let by_ingredient = catalog.list_recipes_by_ingredient("SUGAR").await.unwrap();
    assert_eq!(ids(&by_ingredient), vec!["11000", "11001"]);

    assert_eq!(
        catalog.list_all_categories().await.unwrap(),
        vec!["Cocktail", "Ordinary Drink"]
    );
    assert_eq!(catalog.list_all_glass_types().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_random_recipes_are_distinct_full_records() {
    let catalog = catalog();
    let drawn = catalog.random_recipes(20).await.unwrap();

    assert!(!drawn.is_empty());
    assert!(drawn.len() <= 5);
    let mut seen: Vec<&str> = ids(&drawn);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), drawn.len());
    assert!(drawn.iter().all(|r| !r.ingredients.is_empty()));
}

#[tokio::test]
async fn test_client_construction_uses_config() {
    let config = CatalogConfig {
        api_key: "test-key".to_owned(),
        ..CatalogConfig::default()
    };
    let client = CocktailDbClient::new(config).unwrap();

    assert_eq!(
        client.config().endpoint_url("search.php"),
        "https://www.thecocktaildb.com/api/json/v1/test-key/search.php"
    );
    assert_eq!(client.cache_stats().await, (0, 0, 0));
}
