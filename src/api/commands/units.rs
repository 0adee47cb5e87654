//! Unit conversion command module
//!
//! Conversion failures are not command errors: they come back inside
//! `ConvertUnitsResponse` as display text plus an error kind.

use crate::core::features::unit_converter::{
    self, format_result, parse_input, parse_quantity, unit_label, Category,
};
use crate::shared::error::{AppError, AppResult, ConversionError};
use crate::shared::types::{
    ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse, ParseUnitResponse, UnitDTO,
};

/// Convert the value field for the current selection
pub fn convert_units_command(request: ConvertUnitsRequest) -> AppResult<ConvertUnitsResponse> {
    let outcome = parse_input(&request.input).and_then(|value| {
        let category: Category = request.category.parse()?;
        unit_converter::convert_value(category, &request.from_unit, &request.to_unit, value)
    });

    Ok(response_from(outcome, request.from_unit, request.to_unit))
}

/// Ordered units for one category, with the pair to select after switching to it
pub fn get_units_command(category: &str) -> AppResult<GetUnitsResponse> {
    let category: Category = category
        .parse()
        .map_err(|_| AppError::Validation(format!("Unknown category: {}", category)))?;
    Ok(units_response(category))
}

/// Unit lists for every category, in selector order
pub fn get_all_units_command() -> AppResult<Vec<GetUnitsResponse>> {
    Ok(Category::ALL.into_iter().map(units_response).collect())
}

/// Parse free text and extract amount, unit, and category
pub fn parse_text_command(text: &str) -> AppResult<ParseUnitResponse> {
    let quantity = parse_quantity(text)
        .map_err(|_| AppError::Validation(format!("Could not parse unit from text: {}", text)))?;

    Ok(ParseUnitResponse {
        amount: quantity.amount,
        unit: quantity.unit.to_string(),
        category: quantity.category,
    })
}

/// Parse free text such as "2.5 kg" and convert it to `to_unit`
pub fn convert_text_command(text: &str, to_unit: &str) -> AppResult<ConvertUnitsResponse> {
    let quantity = parse_quantity(text)
        .map_err(|_| AppError::Validation(format!("Could not parse unit from text: {}", text)))?;

    let outcome =
        unit_converter::convert_value(quantity.category, quantity.unit, to_unit, quantity.amount);
    Ok(response_from(outcome, quantity.unit.to_string(), to_unit.to_string()))
}

fn response_from(
    outcome: Result<f64, ConversionError>,
    from_unit: String,
    to_unit: String,
) -> ConvertUnitsResponse {
    match outcome {
        Ok(value) => ConvertUnitsResponse {
            result: Some(value),
            formatted_result: format_result(value),
            from_unit,
            to_unit,
            error: None,
        },
        Err(err) => ConvertUnitsResponse {
            result: None,
            formatted_result: err.to_string(),
            from_unit,
            to_unit,
            error: Some(err.into()),
        },
    }
}

fn units_response(category: Category) -> GetUnitsResponse {
    let (default_from_unit, default_to_unit) = category.default_units();
    let units = category
        .units()
        .iter()
        .map(|&unit| UnitDTO {
            id: unit.to_string(),
            label: unit_label(category, unit).unwrap_or(unit).to_string(),
        })
        .collect();

    GetUnitsResponse {
        category,
        label: category.label().to_string(),
        units,
        default_from_unit: default_from_unit.to_string(),
        default_to_unit: default_to_unit.to_string(),
    }
}
