use once_cell::sync::Lazy;
use regex::Regex;

use super::table::Category;
use crate::shared::error::ConversionError;

/// Amount and unit extracted from free text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedQuantity {
    pub amount: f64,
    pub unit: &'static str,
    pub category: Category,
}

// Constant patterns, so compilation cannot fail at runtime
// Number followed by unit: "12km", "12 km", "5 m3"
static NUMBER_THEN_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:\.\d+)?)\s*([a-zA-Z°³][a-zA-Z0-9°³]*)")
        .expect("Failed to compile number-then-unit pattern")
});

// Unit followed by number: "km 12", "gal 1"
static UNIT_THEN_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-zA-Z°³][a-zA-Z0-9°³]*)\s*([+-]?\d+(?:\.\d+)?)")
        .expect("Failed to compile unit-then-number pattern")
});

static ANY_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:\.\d+)?)").expect("Failed to compile number pattern")
});

// "1,5" and "2,25" use a decimal comma; "1,000" is a thousands separator
static DECIMAL_COMMA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d),(\d{1,2})(\D|$)").expect("Failed to compile decimal comma pattern")
});

static DIGIT_COMMA_DIGIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d,\d").expect("Failed to compile digit comma pattern")
});

// Multi-word and long aliases, longest first so "centimeters" wins over "meters"
const TEXT_ALIASES: &[(&str, &str)] = &[
    ("cubic meters", "m3"), ("cubic metres", "m3"),
    ("centimeters", "cm"), ("centimetres", "cm"),
    ("millimeters", "mm"), ("millimetres", "mm"),
    ("kilometers", "km"), ("kilometres", "km"),
    ("milliliters", "ml"), ("millilitres", "ml"),
    ("milligrams", "mg"), ("kilograms", "kg"),
    ("fahrenheit", "fahrenheit"), ("celsius", "celsius"), ("kelvin", "kelvin"),
    ("gallons", "gal"), ("gallon", "gal"),
    ("meters", "m"), ("metres", "m"),
    ("liters", "l"), ("litres", "l"),
    ("grams", "g"),
];

// Whole words only, so "programs" and "megameters" do not match
static TEXT_ALIAS: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = TEXT_ALIASES
        .iter()
        .map(|(alias, _)| regex::escape(alias).replace(' ', r"\s+"))
        .collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
        .expect("Failed to compile text alias pattern")
});

/// Map a unit spelling to its table id and category
pub fn normalize_unit(unit: &str) -> Option<(Category, &'static str)> {
    let unit_lower = unit.trim().to_lowercase();
    let normalized = match unit_lower.as_str() {
        // Length
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => (Category::Length, "cm"),
        "m" | "meter" | "meters" | "metre" | "metres" => (Category::Length, "m"),
        "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => (Category::Length, "km"),
        "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => (Category::Length, "mm"),
        // Weight
        "g" | "gram" | "grams" => (Category::Weight, "g"),
        "kg" | "kilogram" | "kilograms" | "kilo" | "kilos" => (Category::Weight, "kg"),
        "mg" | "milligram" | "milligrams" => (Category::Weight, "mg"),
        // Temperature
        "c" | "°c" | "celsius" => (Category::Temperature, "celsius"),
        "f" | "°f" | "fahrenheit" => (Category::Temperature, "fahrenheit"),
        "k" | "kelvin" => (Category::Temperature, "kelvin"),
        // Volume
        "l" | "liter" | "liters" | "litre" | "litres" => (Category::Volume, "l"),
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => (Category::Volume, "ml"),
        "m3" | "m³" => (Category::Volume, "m3"),
        "gal" | "gallon" | "gallons" => (Category::Volume, "gal"),
        _ => return None,
    };
    Some(normalized)
}

/// Extract the first amount/unit pair from text such as "2.5 kg" or "100 centimeters"
pub fn parse_quantity(text: &str) -> Result<ParsedQuantity, ConversionError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ConversionError::InvalidInput);
    }

    let normalized_text = DECIMAL_COMMA.replace_all(text, "${1}.${2}${3}");
    if DIGIT_COMMA_DIGIT.is_match(&normalized_text) {
        log::debug!("[parse_quantity] Ambiguous comma in number: '{}'", text);
        return Err(ConversionError::InvalidInput);
    }

    if let Some(caps) = NUMBER_THEN_UNIT.captures(&normalized_text) {
        if let Some(quantity) = quantity_from(caps.get(1), caps.get(2)) {
            log::debug!("[parse_quantity] Extracted: {} {} from '{}'", quantity.amount, quantity.unit, text);
            return Ok(quantity);
        }
    }

    if let Some(caps) = UNIT_THEN_NUMBER.captures(&normalized_text) {
        if let Some(quantity) = quantity_from(caps.get(2), caps.get(1)) {
            log::debug!("[parse_quantity] Extracted: {} {} from '{}'", quantity.amount, quantity.unit, text);
            return Ok(quantity);
        }
    }

    // Any number plus any known alias elsewhere in the text
    if let Some(number) = ANY_NUMBER.find(&normalized_text) {
        if let Ok(amount) = number.as_str().parse::<f64>() {
            if let Some((category, unit)) = TEXT_ALIAS.find(&normalized_text).and_then(|m| resolve_alias(m.as_str())) {
                log::debug!("[parse_quantity] Extracted: {} {} from '{}'", amount, unit, text);
                return Ok(ParsedQuantity { amount, unit, category });
            }
        }
    }

    log::debug!("[parse_quantity] Failed to parse: '{}'", text);
    Err(ConversionError::InvalidInput)
}

fn resolve_alias(matched: &str) -> Option<(Category, &'static str)> {
    let matched = matched.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let (_, canonical) = TEXT_ALIASES.iter().find(|(alias, _)| *alias == matched)?;
    normalize_unit(canonical)
}

fn quantity_from(amount: Option<regex::Match<'_>>, unit: Option<regex::Match<'_>>) -> Option<ParsedQuantity> {
    let amount = amount?.as_str().parse::<f64>().ok()?;
    let (category, unit) = normalize_unit(unit?.as_str())?;
    Some(ParsedQuantity { amount, unit, category })
}
