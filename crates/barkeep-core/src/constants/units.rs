// ABOUTME: Measurement conversion constants for cocktail recipes
// ABOUTME: Bar-style rounding (1 oz = 30 ml) rather than the exact 29.5735
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

/// Milliliters per fluid ounce
pub const ML_PER_OZ: f64 = 30.0;

/// Decimal places kept when inverting [`ML_PER_OZ`] into an ml→oz factor
pub const OZ_PER_ML_DECIMALS: i32 = 2;

/// Unit label for fluid ounces
pub const OZ_LABEL: &str = "oz";

/// Unit label for milliliters
pub const ML_LABEL: &str = "ml";
