// ABOUTME: Per-user document model kept by the preference store
// ABOUTME: Owned ingredients, favorites, notes, taste preferences, and display settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::units::{ML_LABEL, OZ_LABEL};
use crate::errors::AppError;

/// Identifier issued by the authentication service
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an authentication-service user id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Volume unit system for displayed measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Fluid ounces
    #[default]
    Oz,
    /// Milliliters
    Ml,
}

impl UnitSystem {
    /// Unit literal written into converted measures
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Oz => OZ_LABEL,
            Self::Ml => ML_LABEL,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "oz" => Ok(Self::Oz),
            "ml" => Ok(Self::Ml),
            other => Err(AppError::invalid_input(format!(
                "Unknown unit system '{other}' (expected 'oz' or 'ml')"
            ))),
        }
    }
}

/// A favorited drink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Catalog recipe id
    pub recipe_id: String,
    /// When the drink was favorited
    pub added_at: DateTime<Utc>,
}

/// A free-text note attached to a drink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkNote {
    /// Note identifier
    pub id: Uuid,
    /// Catalog recipe id
    pub recipe_id: String,
    /// Note body (trimmed, never empty)
    pub text: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Onboarding taste preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TastePreferences {
    /// Preferred drink categories
    pub drinks: Vec<String>,
    /// Preferred ingredients
    pub ingredients: Vec<String>,
    /// Ingredients the user must avoid
    pub allergies: Vec<String>,
}

/// Account display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Unit system for measures
    pub units: UnitSystem,
    /// Dark theme enabled
    pub dark_mode: bool,
    /// UI language code
    pub language: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            dark_mode: false,
            language: "en".to_owned(),
        }
    }
}

/// Everything the preference store keeps for one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDocument {
    /// Ingredients in the user's bar
    pub owned_ingredients: BTreeSet<String>,
    /// Favorited drinks in insertion order
    pub favorites: Vec<Favorite>,
    /// Notes across all drinks
    pub notes: Vec<DrinkNote>,
    /// Onboarding preferences
    pub preferences: TastePreferences,
    /// Display settings
    pub settings: DisplaySettings,
    /// Number of cocktails makeable with the owned ingredients
    pub available_cocktails: usize,
}
