// ABOUTME: Measurement scaler for textual recipe measures ("1 1/2 oz", "2-3 dashes")
// ABOUTME: Multiplies by the serving count and converts between oz and ml when asked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! Measure text is an optional numeric portion followed by free text. The
//! numeric portion is every run of digits, `.`, `/`, and `-`; the rest,
//! trimmed, is the unit/text portion. Only volume measures labelled `oz` or
//! `ml` are ever unit-converted; "dashes", "leaves", "cl" and friends are
//! scaled but keep their label.

use std::sync::LazyLock;

use barkeep_core::constants::units::{ML_PER_OZ, OZ_PER_ML_DECIMALS};
use barkeep_core::models::UnitSystem;
use regex::Regex;

static NUMERIC_RUN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[\d/\-.]+").ok());

static UNIT_LABEL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)oz|ml").ok());

/// Unit conversion applied to a measure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Keep the measure's own unit
    None,
    /// Ounces to milliliters
    OzToMl,
    /// Milliliters to ounces
    MlToOz,
}

impl Conversion {
    /// Decide the conversion for a measure's text portion
    ///
    /// Conversion applies iff the text mentions `oz` and the target is ml,
    /// or mentions `ml` and the target is oz (case-insensitive substring).
    #[must_use]
    pub fn detect(text: &str, target: UnitSystem) -> Self {
        let lower = text.to_lowercase();
        match target {
            UnitSystem::Ml if lower.contains("oz") => Self::OzToMl,
            UnitSystem::Oz if lower.contains("ml") => Self::MlToOz,
            _ => Self::None,
        }
    }

    /// Multiplicative factor for this conversion
    ///
    /// The ml→oz factor is `1/30` rounded to two decimals (0.03).
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::None => 1.0,
            Self::OzToMl => ML_PER_OZ,
            Self::MlToOz => {
                let scale = 10_f64.powi(OZ_PER_ML_DECIMALS);
                (scale / ML_PER_OZ).round() / scale
            }
        }
    }

    /// Whether the unit label is rewritten
    #[must_use]
    pub const fn is_applied(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One numeric token after parsing
#[derive(Debug, Clone, Copy, PartialEq)]
enum Quantity {
    Single(f64),
    Range(f64, f64),
}

impl Quantity {
    fn render(self, servings: f64, factor: f64) -> String {
        match self {
            Self::Single(value) => format!("{}", value * servings * factor),
            Self::Range(min, max) => {
                format!("{}-{}", min * servings * factor, max * servings * factor)
            }
        }
    }
}

/// Scale a measure by a serving count and convert it to `target` units
///
/// A measure without any number, or with a number that does not parse
/// ("1/0", "1/2-3"), is returned unchanged. Several numeric
/// tokens are joined with `-`, except that a whole number followed by a
/// fraction ("1 1/2") reads as one mixed quantity. `servings` below one is
/// treated as one.
#[must_use]
pub fn scale_measure(measure: &str, servings: u32, target: UnitSystem) -> String {
    let Some(numeric) = NUMERIC_RUN.as_ref() else {
        return measure.to_owned();
    };

    let Some(quantities) = parse_quantities(measure, numeric) else {
        return measure.to_owned();
    };
    if quantities.is_empty() {
        return measure.to_owned();
    }

    let text = numeric.replace_all(measure, "");
    let text = text.trim();
    let conversion = Conversion::detect(text, target);
    let factor = conversion.factor();
    let servings = f64::from(servings.max(1));

    let scaled = quantities
        .iter()
        .map(|q| q.render(servings, factor))
        .collect::<Vec<_>>()
        .join("-");

    let text = match (conversion.is_applied(), UNIT_LABEL.as_ref()) {
        (true, Some(label)) => label.replacen(text, 1, target.label()).into_owned(),
        _ => text.to_owned(),
    };

    format!("{scaled} {text}")
}

/// Parse the numeric runs of `measure` into quantities
///
/// Runs without a digit are skipped. `None` when a run with a digit fails to
/// parse.
fn parse_quantities(measure: &str, numeric: &Regex) -> Option<Vec<Quantity>> {
    let runs: Vec<_> = numeric
        .find_iter(measure)
        .filter(|m| m.as_str().chars().any(|c| c.is_ascii_digit()))
        .collect();

    let mut quantities = Vec::with_capacity(runs.len());
    let mut i = 0;
    while i < runs.len() {
        let token = runs[i].as_str();
        if let Some(next) = runs.get(i + 1) {
            let gap = &measure[runs[i].end()..next.start()];
            if is_whole_number(token) && !gap.is_empty() && gap.trim().is_empty() {
                if let (Ok(whole), Some(fraction)) = (token.parse::<f64>(), parse_fraction(next.as_str())) {
                    quantities.push(Quantity::Single(whole + fraction));
                    i += 2;
                    continue;
                }
            }
        }
        quantities.push(parse_token(token)?);
        i += 1;
    }
    Some(quantities)
}

fn parse_token(token: &str) -> Option<Quantity> {
    if token.contains('/') {
        return parse_fraction(token).map(Quantity::Single);
    }
    if let Some((min, max)) = token.split_once('-') {
        return match (parse_number(min), parse_number(max)) {
            (Some(min), Some(max)) => Some(Quantity::Range(min, max)),
            (Some(value), None) | (None, Some(value)) => Some(Quantity::Single(value)),
            (None, None) => None,
        };
    }
    parse_number(token).map(Quantity::Single)
}

fn parse_fraction(token: &str) -> Option<f64> {
    let (numerator, denominator) = token.split_once('/')?;
    let numerator = parse_number(numerator)?;
    let denominator = parse_number(denominator)?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty() {
        return None;
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_whole_number(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_factor_rounding() {
        assert!((Conversion::MlToOz.factor() - 0.03).abs() < f64::EPSILON);
        assert!((Conversion::OzToMl.factor() - 30.0).abs() < f64::EPSILON);
        assert!((Conversion::None.factor() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_detect_requires_opposite_unit() {
        assert_eq!(Conversion::detect("oz", UnitSystem::Oz), Conversion::None);
        assert_eq!(Conversion::detect("OZ", UnitSystem::Ml), Conversion::OzToMl);
        assert_eq!(Conversion::detect("ml", UnitSystem::Oz), Conversion::MlToOz);
        assert_eq!(Conversion::detect("dashes", UnitSystem::Ml), Conversion::None);
    }

    #[test]
    fn test_mixed_number_is_one_quantity() {
        let numeric = NUMERIC_RUN.as_ref().unwrap();
        assert_eq!(
            parse_quantities("1 1/2 oz", numeric),
            Some(vec![Quantity::Single(1.5)])
        );
    }

    #[test]
    fn test_runs_without_digits_are_ignored() {
        let numeric = NUMERIC_RUN.as_ref().unwrap();
        assert_eq!(parse_quantities("Top-up with soda.", numeric), Some(vec![]));
    }

    #[test]
    fn test_unparseable_run_rejects_whole_measure() {
        let numeric = NUMERIC_RUN.as_ref().unwrap();
        assert_eq!(parse_quantities("2 1/2-3 oz", numeric), None);
    }

    #[test]
    fn test_zero_denominator_is_skipped() {
        assert_eq!(parse_token("1/0"), None);
    }

    #[test]
    fn test_range_token() {
        assert_eq!(parse_token("2-3"), Some(Quantity::Range(2.0, 3.0)));
    }
}
