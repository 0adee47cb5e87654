//! Static conversion table
//!
//! Maps category → source unit → target unit to a [`Rule`]. Built once on
//! first access and never mutated afterwards.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::shared::error::ConversionError;

// ============================================================================
// Categories
// ============================================================================

/// Measurement categories offered by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
}

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
        }
    }

    /// Display label for the category selector
    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
            Category::Volume => "Volume",
        }
    }

    /// Ordered unit identifiers for this category
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Category::Length => &["cm", "m", "km", "mm"],
            Category::Weight => &["g", "kg", "mg"],
            Category::Temperature => &["celsius", "fahrenheit", "kelvin"],
            Category::Volume => &["l", "ml", "m3", "gal"],
        }
    }

    /// First two listed units, used as the from/to pair when the category changes
    pub fn default_units(&self) -> (&'static str, &'static str) {
        let units = self.units();
        (units[0], units[1])
    }

    pub fn has_unit(&self, unit: &str) -> bool {
        self.units().iter().any(|known| *known == unit)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(ConversionError::ConversionNotPossible)
    }
}

/// Ordered unit identifiers for a category
pub fn units_for(category: Category) -> &'static [&'static str] {
    category.units()
}

/// Human-readable unit name (e.g. "cm" → "Centimeters")
pub fn unit_label(category: Category, unit: &str) -> Option<&'static str> {
    let label = match (category, unit) {
        (Category::Length, "cm") => "Centimeters",
        (Category::Length, "m") => "Meters",
        (Category::Length, "km") => "Kilometers",
        (Category::Length, "mm") => "Millimeters",
        (Category::Weight, "g") => "Grams",
        (Category::Weight, "kg") => "Kilograms",
        (Category::Weight, "mg") => "Milligrams",
        (Category::Temperature, "celsius") => "Celsius",
        (Category::Temperature, "fahrenheit") => "Fahrenheit",
        (Category::Temperature, "kelvin") => "Kelvin",
        (Category::Volume, "l") => "Liters",
        (Category::Volume, "ml") => "Milliliters",
        (Category::Volume, "m3") => "Cubic Meters",
        (Category::Volume, "gal") => "Gallons",
        _ => return None,
    };
    Some(label)
}

// ============================================================================
// Rules
// ============================================================================

/// How one unit converts into another
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// `to = from * factor`
    ScaleFactor(f64),
    /// `to = transform(from)`, for affine conversions such as temperature
    Transform(fn(f64) -> f64),
}

impl Rule {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rule::ScaleFactor(factor) => value * factor,
            Rule::Transform(transform) => transform(value),
        }
    }
}

// Temperature transforms
// Formula: F = (C × 9/5) + 32, K = C + 273.15
fn identity(value: f64) -> f64 {
    value
}

fn celsius_to_fahrenheit(value: f64) -> f64 {
    (value * 9.0) / 5.0 + 32.0
}

fn celsius_to_kelvin(value: f64) -> f64 {
    value + 273.15
}

fn fahrenheit_to_celsius(value: f64) -> f64 {
    ((value - 32.0) * 5.0) / 9.0
}

fn fahrenheit_to_kelvin(value: f64) -> f64 {
    ((value - 32.0) * 5.0) / 9.0 + 273.15
}

fn kelvin_to_celsius(value: f64) -> f64 {
    value - 273.15
}

fn kelvin_to_fahrenheit(value: f64) -> f64 {
    ((value - 273.15) * 9.0) / 5.0 + 32.0
}

// ============================================================================
// Table
// ============================================================================

type SubTable = HashMap<&'static str, HashMap<&'static str, Rule>>;

fn scale_rows(rows: &[(&'static str, &[(&'static str, f64)])]) -> SubTable {
    rows.iter()
        .map(|(from, targets)| {
            let row = targets
                .iter()
                .map(|(to, factor)| (*to, Rule::ScaleFactor(*factor)))
                .collect();
            (*from, row)
        })
        .collect()
}

fn rule_rows(rows: &[(&'static str, &[(&'static str, Rule)])]) -> SubTable {
    rows.iter()
        .map(|(from, targets)| (*from, targets.iter().copied().collect()))
        .collect()
}

/// Thread-safe conversion table initialized once on first use
static CONVERSION_TABLE: Lazy<HashMap<Category, SubTable>> = Lazy::new(|| {
    let mut table = HashMap::new();

    table.insert(
        Category::Length,
        scale_rows(&[
            ("cm", &[("m", 0.01), ("km", 0.00001), ("cm", 1.0), ("mm", 10.0)]),
            ("m", &[("cm", 100.0), ("km", 0.001), ("m", 1.0), ("mm", 1000.0)]),
            ("km", &[("cm", 100000.0), ("m", 1000.0), ("km", 1.0), ("mm", 1000000.0)]),
            ("mm", &[("cm", 0.1), ("m", 0.001), ("km", 0.000001), ("mm", 1.0)]),
        ]),
    );

    table.insert(
        Category::Weight,
        scale_rows(&[
            ("g", &[("kg", 0.001), ("g", 1.0), ("mg", 1000.0)]),
            ("kg", &[("g", 1000.0), ("kg", 1.0), ("mg", 1000000.0)]),
            ("mg", &[("g", 0.001), ("kg", 0.000001), ("mg", 1.0)]),
        ]),
    );

    table.insert(
        Category::Temperature,
        rule_rows(&[
            (
                "celsius",
                &[
                    ("fahrenheit", Rule::Transform(celsius_to_fahrenheit)),
                    ("celsius", Rule::Transform(identity)),
                    ("kelvin", Rule::Transform(celsius_to_kelvin)),
                ],
            ),
            (
                "fahrenheit",
                &[
                    ("celsius", Rule::Transform(fahrenheit_to_celsius)),
                    ("fahrenheit", Rule::Transform(identity)),
                    ("kelvin", Rule::Transform(fahrenheit_to_kelvin)),
                ],
            ),
            (
                "kelvin",
                &[
                    ("celsius", Rule::Transform(kelvin_to_celsius)),
                    ("fahrenheit", Rule::Transform(kelvin_to_fahrenheit)),
                    ("kelvin", Rule::Transform(identity)),
                ],
            ),
        ]),
    );

    // Gallon factors are truncated decimal approximations, not exact reciprocals
    table.insert(
        Category::Volume,
        scale_rows(&[
            ("l", &[("ml", 1000.0), ("l", 1.0), ("m3", 0.001), ("gal", 0.264172)]),
            ("ml", &[("l", 0.001), ("ml", 1.0), ("m3", 1e-6), ("gal", 0.000264172)]),
            ("m3", &[("l", 1000.0), ("ml", 1000000.0), ("m3", 1.0), ("gal", 264.172)]),
            ("gal", &[("l", 3.78541), ("ml", 3785.41), ("m3", 0.00378541), ("gal", 1.0)]),
        ]),
    );

    log::debug!("[conversion_table] Built table for {} categories", table.len());
    table
});

/// Find the rule converting `from` into `to` within `category`
pub fn lookup(category: Category, from: &str, to: &str) -> Option<Rule> {
    let rule = CONVERSION_TABLE
        .get(&category)
        .and_then(|sub_table| sub_table.get(from))
        .and_then(|row| row.get(to))
        .copied();

    if rule.is_none() {
        log::trace!("[lookup] No rule for {} {} → {}", category, from, to);
    }
    rule
}
