// ABOUTME: TheCocktailDB JSON wire format and its mapping onto domain recipes
// ABOUTME: Handles null and "None Found" payloads and numbered ingredient/measure slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Every endpoint answers `{"drinks": ...}` where the payload is a list,
//! `null`, or (for some filters) the string `"None Found"`. Drink records
//! carry their ingredients in numbered `strIngredientN`/`strMeasureN` pairs;
//! those are folded into an ordered slot list here and nowhere else.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::constants::catalog::{MAX_INGREDIENT_SLOTS, NONE_FOUND_SENTINEL};
use crate::errors::AppResult;
use crate::models::{AlcoholicContent, Recipe, RecipeIngredient};

/// Envelope shared by every endpoint
#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
pub struct DrinksEnvelope<T> {
    #[serde(default)]
    drinks: Option<DrinksPayload<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged, bound = "T: DeserializeOwned")]
enum DrinksPayload<T> {
    List(Vec<T>),
    Sentinel(String),
}

impl<T: DeserializeOwned> DrinksEnvelope<T> {
    /// The records, with `null` and the "none found" sentinel as empty
    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        match self.drinks {
            Some(DrinksPayload::List(records)) => records,
            Some(DrinksPayload::Sentinel(text)) => {
                if text != NONE_FOUND_SENTINEL {
                    warn!(payload = %text, "Unexpected string payload from catalog");
                }
                Vec::new()
            }
            None => Vec::new(),
        }
    }
}

/// Parse a response body into its records
///
/// # Errors
///
/// Returns a serialization error when the body is not a drinks envelope
pub fn parse_records<T: DeserializeOwned>(body: &str) -> AppResult<Vec<T>> {
    let envelope: DrinksEnvelope<T> = serde_json::from_str(body)?;
    Ok(envelope.into_records())
}

/// One drink as the catalog sends it (full record or summary)
#[derive(Debug, Clone, Deserialize)]
pub struct DrinkRecord {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink")]
    name: String,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    alcoholic: Option<String>,
    #[serde(rename = "strGlass", default)]
    glass: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    thumbnail: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl DrinkRecord {
    fn slot(&self, prefix: &str, index: usize) -> Option<&str> {
        self.slots
            .get(&format!("{prefix}{index}"))
            .and_then(Value::as_str)
            .map(str::trim)
    }

    fn ingredients(&self) -> Vec<RecipeIngredient> {
        (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|i| {
                let name = self.slot("strIngredient", i).filter(|n| !n.is_empty())?;
                let measure = self.slot("strMeasure", i).unwrap_or_default();
                Some(RecipeIngredient::new(name, measure))
            })
            .collect()
    }
}

impl From<DrinkRecord> for Recipe {
    fn from(record: DrinkRecord) -> Self {
        let ingredients = record.ingredients();
        let alcoholic = record.alcoholic.as_deref().and_then(|label| {
            let parsed = AlcoholicContent::from_label(label.trim());
            if parsed.is_none() {
                warn!(drink.id = %record.id, label, "Unknown alcoholic classification");
            }
            parsed
        });

        Self {
            id: record.id,
            name: record.name,
            category: record.category.unwrap_or_default(),
            alcoholic,
            glass: record.glass.unwrap_or_default(),
            ingredients: Vec::new(),
            instructions: record.instructions.unwrap_or_default(),
            thumbnail: record.thumbnail.filter(|t| !t.is_empty()),
        }
        .with_ingredients(ingredients)
    }
}

/// Entry of `list.php?i=list`
#[derive(Debug, Deserialize)]
pub struct IngredientEntry {
    /// Ingredient name
    #[serde(rename = "strIngredient1")]
    pub name: String,
}

/// Entry of `list.php?c=list`
#[derive(Debug, Deserialize)]
pub struct CategoryEntry {
    /// Category name
    #[serde(rename = "strCategory")]
    pub name: String,
}

/// Entry of `list.php?g=list`
#[derive(Debug, Deserialize)]
pub struct GlassEntry {
    /// Glass type
    #[serde(rename = "strGlass")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_null_and_sentinel_are_empty() {
        assert!(parse_records::<DrinkRecord>(r#"{"drinks": null}"#)
            .unwrap()
            .is_empty());
        assert!(parse_records::<DrinkRecord>(r#"{"drinks": "None Found"}"#)
            .unwrap()
            .is_empty());
        assert!(parse_records::<DrinkRecord>("{}").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_body_is_serialization_error() {
        let error = parse_records::<DrinkRecord>("<html>").unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }

    #[test]
    fn test_slots_stop_at_missing_names() {
        let body = r#"{"drinks":[{
            "idDrink":"1","strDrink":"Test",
            "strIngredient1":"Gin","strMeasure1":"2 oz ",
            "strIngredient2":null,"strMeasure2":null,
            "strIngredient3":"  ","strMeasure3":"1 dash",
            "strIngredient4":"Tonic","strMeasure4":null
        }]}"#;
        let recipe: Recipe = parse_records::<DrinkRecord>(body)
            .unwrap()
            .remove(0)
            .into();
        assert_eq!(
            recipe.ingredients,
            vec![
                RecipeIngredient::new("Gin", "2 oz"),
                RecipeIngredient::new("Tonic", ""),
            ]
        );
    }
}
