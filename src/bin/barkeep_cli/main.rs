// ABOUTME: Barkeep CLI - browse TheCocktailDB and check what your bar can make
// ABOUTME: Parses subcommands, sets up logging and configuration, and dispatches to handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors
//!
//! Usage:
//! ```bash
//! # Search drinks by name (an empty query shows random drinks)
//! barkeep-cli search margarita
//!
//! # Show a recipe card for two servings in milliliters
//! barkeep-cli show 11007 --servings 2 --units ml --have Tequila
//!
//! # List what can be made from a set of ingredients
//! barkeep-cli makeable Vodka "Lime juice" --glass "Highball glass"
//!
//! # Ingredient picker suggestions
//! barkeep-cli ingredients rum
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use barkeep::catalog::CocktailDbClient;
use barkeep::config::BarkeepConfig;
use barkeep::logging::LoggingConfig;
use barkeep::models::UnitSystem;
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "barkeep-cli",
    about = "Barkeep cocktail catalog CLI",
    long_about = "Search TheCocktailDB, print scaled recipe cards, and find what your bar can make."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search drinks by name
    Search {
        /// Name fragment; leave empty for random drinks
        #[arg(default_value = "")]
        query: String,
    },

    /// Show a recipe card
    Show {
        /// Catalog id of the drink
        id: String,

        /// Number of servings to scale the measures to
        #[arg(long, short = 's', default_value = "1")]
        servings: u32,

        /// Unit system for measures (oz or ml)
        #[arg(long, short = 'u', default_value = "oz")]
        units: UnitSystem,

        /// Ingredients you own (repeatable)
        #[arg(long = "have")]
        owned: Vec<String>,
    },

    /// List drinks that use at least one of the given ingredients
    Makeable {
        /// Ingredients you own
        #[arg(required = true)]
        ingredients: Vec<String>,

        /// Only drinks in these categories (repeatable)
        #[arg(long)]
        category: Vec<String>,

        /// Only drinks served in these glasses (repeatable)
        #[arg(long)]
        glass: Vec<String>,

        /// Sort names Z to A
        #[arg(long)]
        descending: bool,
    },

    /// Suggest ingredients for the picker
    Ingredients {
        /// Name fragment; leave empty for a random sample
        #[arg(default_value = "")]
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let config = BarkeepConfig::from_env()?;
    info!(catalog = %config.catalog.base_url, "Barkeep CLI");
    let catalog = CocktailDbClient::new(config.catalog.clone())?;

    match cli.command {
        Command::Search { query } => {
            commands::search(&catalog, &query, config.search.random_count).await?;
        }
        Command::Show {
            id,
            servings,
            units,
            owned,
        } => {
            commands::show(&catalog, &id, servings, units, owned).await?;
        }
        Command::Makeable {
            ingredients,
            category,
            glass,
            descending,
        } => {
            commands::makeable(catalog, &config, &ingredients, category, glass, descending).await?;
        }
        Command::Ingredients { query } => {
            commands::ingredients(&catalog, &query).await?;
        }
    }

    Ok(())
}
