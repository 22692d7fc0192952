// ABOUTME: Criterion benchmarks for the pure cocktail algorithms
// ABOUTME: Measures drink filtering/sorting, measure scaling, and availability over synthetic catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Criterion benchmarks for the filter engine and measurement scaler.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use std::collections::BTreeSet;

use barkeep::intelligence::availability::compute_availability;
use barkeep::intelligence::filtering::filter_drinks;
use barkeep::intelligence::measurement::scale_measure;
use barkeep::models::{AlcoholicContent, DrinkFilter, Recipe, RecipeIngredient, SortOrder, UnitSystem};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const CATEGORIES: [&str; 4] = ["Cocktail", "Ordinary Drink", "Shot", "Punch / Party Drink"];
const GLASSES: [&str; 4] = ["Cocktail glass", "Highball glass", "Old-fashioned glass", "Shot glass"];
const INGREDIENTS: [&str; 8] = [
    "Vodka",
    "Gin",
    "Light rum",
    "Tequila",
    "Lime juice",
    "Sugar syrup",
    "Triple sec",
    "Soda water",
];
const MEASURES: [&str; 6] = ["1 1/2 oz", "2-3 dashes", "30 ml", "1/4 oz", "Fill with", "2 cl"];

fn synthetic_catalog(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|index| {
            let alcoholic = if index % 5 == 0 {
                AlcoholicContent::NonAlcoholic
            } else {
                AlcoholicContent::Alcoholic
            };
            Recipe {
                id: format!("{}", 10_000 + index),
                name: format!("Drink {}", count - index),
                category: CATEGORIES[index % CATEGORIES.len()].to_owned(),
                alcoholic: Some(alcoholic),
                glass: GLASSES[index % GLASSES.len()].to_owned(),
                ingredients: Vec::new(),
                instructions: String::new(),
                thumbnail: None,
            }
            .with_ingredients((0..4).map(|slot| {
                RecipeIngredient::new(
                    INGREDIENTS[(index + slot * 3) % INGREDIENTS.len()],
                    MEASURES[(index + slot) % MEASURES.len()],
                )
            }))
        })
        .collect()
}

fn bench_filter_drinks(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_drinks");
    let filter = DrinkFilter {
        sorting: SortOrder::Descending,
        alcoholic: vec![AlcoholicContent::Alcoholic],
        category: vec!["Cocktail".to_owned(), "Shot".to_owned()],
        glass: vec!["cocktail glass".to_owned(), "shot glass".to_owned()],
        ingredients: vec!["gin".to_owned(), "Tequila".to_owned()],
    };

    for count in [100_usize, 1_000, 10_000] {
        let drinks = synthetic_catalog(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("all_axes", count), &drinks, |b, drinks| {
            b.iter(|| filter_drinks(black_box(drinks), black_box(&filter)));
        });
        group.bench_with_input(BenchmarkId::new("sort_only", count), &drinks, |b, drinks| {
            let sort_only = DrinkFilter::default();
            b.iter(|| filter_drinks(black_box(drinks), black_box(&sort_only)));
        });
    }

    group.finish();
}

fn bench_scale_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_measure");
    for measure in MEASURES {
        group.bench_with_input(BenchmarkId::new("to_ml", measure), measure, |b, measure| {
            b.iter(|| scale_measure(black_box(measure), black_box(3), UnitSystem::Ml));
        });
    }
    group.finish();
}

fn bench_availability(c: &mut Criterion) {
    let owned: BTreeSet<String> = INGREDIENTS.iter().step_by(2).map(|s| (*s).to_owned()).collect();
    let recipe_ingredients: Vec<String> = INGREDIENTS.iter().map(|s| s.to_uppercase()).collect();
    c.bench_function("compute_availability", |b| {
        b.iter(|| compute_availability(black_box(&recipe_ingredients), black_box(&owned)));
    });
}

criterion_group!(benches, bench_filter_drinks, bench_scale_measure, bench_availability);
criterion_main!(benches);
