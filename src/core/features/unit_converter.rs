//! Unit converter feature
//!
//! Turns a (category, from unit, to unit, raw input) selection into the text
//! shown in the widget's result field. Every failure is reported as one of two
//! fixed display strings; nothing is thrown across the `convert` boundary.
//!
//! - `table`: static conversion rules per category
//! - `parsing`: free-text quantities such as "2.5 kg"
//! - `form`: the widget's selection state

pub mod form;
pub mod parsing;
pub mod table;

pub use form::ConverterForm;
pub use parsing::{parse_quantity, ParsedQuantity};
pub use table::{lookup, unit_label, units_for, Category, Rule};

use crate::shared::error::ConversionError;

// ============================================================================
// Conversion Engine
// ============================================================================

/// Convert `raw_input` from `from_unit` to `to_unit` within `category`
///
/// Returns the result with exactly two fractional digits ("100.00"), or
/// "Invalid input" / "Conversion not possible".
pub fn convert(category: &str, from_unit: &str, to_unit: &str, raw_input: &str) -> String {
    match try_convert(category, from_unit, to_unit, raw_input) {
        Ok(formatted) => formatted,
        Err(err) => {
            log::debug!(
                "[convert] {} {} → {} '{}': {}",
                category, from_unit, to_unit, raw_input, err
            );
            err.to_string()
        }
    }
}

/// Typed form of [`convert`]
///
/// Input is parsed before the category and units are looked up, so bad input
/// wins over an unknown combination.
pub fn try_convert(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    raw_input: &str,
) -> Result<String, ConversionError> {
    let value = parse_input(raw_input)?;
    let category: Category = category.parse()?;
    let result = convert_value(category, from_unit, to_unit, value)?;
    Ok(format_result(result))
}

/// Apply the table rule for `from_unit` → `to_unit` to an already parsed value
pub fn convert_value(
    category: Category,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    let rule = lookup(category, from_unit, to_unit).ok_or(ConversionError::ConversionNotPossible)?;
    let result = rule.apply(value);

    // Scaling a huge input can overflow to infinity
    if !result.is_finite() {
        return Err(ConversionError::ConversionNotPossible);
    }

    log::trace!(
        "[convert_value] {} {} → {} {} ({:?})",
        value, from_unit, result, to_unit, rule
    );
    Ok(result)
}

/// Parse the raw value field into a finite number
pub fn parse_input(raw_input: &str) -> Result<f64, ConversionError> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::InvalidInput);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConversionError::InvalidInput),
    }
}

/// Format with exactly two fractional digits, e.g. 100 → "100.00"
pub fn format_result(value: f64) -> String {
    // Keeps the sign of tiny negatives: -0.001 → "-0.00"
    format!("{:.2}", value)
}

/// Parse a free-text quantity and convert it to `to_unit`
///
/// The category comes from the unit found in the text.
pub fn convert_text(text: &str, to_unit: &str) -> Result<(ParsedQuantity, f64), ConversionError> {
    let quantity = parse_quantity(text)?;
    let result = convert_value(quantity.category, quantity.unit, to_unit, quantity.amount)?;
    Ok((quantity, result))
}
