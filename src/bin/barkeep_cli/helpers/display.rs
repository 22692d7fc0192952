// ABOUTME: Output formatting helpers for barkeep-cli
// ABOUTME: Prints drink lists and recipe cards in a consistent layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use barkeep::models::Recipe;
use barkeep::services::recipe_card::RecipeCard;

/// One line per drink: id and name
pub fn print_drinks(drinks: &[Recipe]) {
    if drinks.is_empty() {
        println!("  (none)");
        return;
    }
    for drink in drinks {
        println!("  {:>6}  {}", drink.id, drink.name);
    }
}

/// Full recipe card; availability marks are shown only when the bar is known
pub fn print_recipe_card(card: &RecipeCard, show_availability: bool) {
    let recipe = &card.recipe;
    println!("\n{}", recipe.name);
    println!("{}", "=".repeat(recipe.name.chars().count().max(20)));
    if !recipe.category.is_empty() {
        println!("Category: {}", recipe.category);
    }
    if let Some(alcoholic) = recipe.alcoholic {
        println!("Type:     {alcoholic}");
    }
    if !recipe.glass.is_empty() {
        println!("Glass:    {}", recipe.glass);
    }
    println!("Servings: {} ({})", card.servings, card.units);

    println!("\nIngredients:");
    for row in &card.rows {
        let mark = match (show_availability, row.available) {
            (false, _) => "  ",
            (true, true) => "+ ",
            (true, false) => "- ",
        };
        if row.measure.trim().is_empty() {
            println!("  {mark}{}", row.name);
        } else {
            println!("  {mark}{:<24} {}", row.name, row.measure.trim());
        }
    }

    if !card.steps.is_empty() {
        println!("\nSteps:");
        for (index, step) in card.steps.iter().enumerate() {
            println!("  {}. {step}", index + 1);
        }
    }

    if show_availability {
        let missing = card.missing_ingredients();
        if !missing.is_empty() {
            println!("\nStill needed: {}", missing.join(", "));
        }
    }
}
