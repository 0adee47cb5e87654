use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::features::unit_converter::Category;
use crate::shared::error::ConversionError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsRequest {
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
    /// Raw text from the value field, parsed by the backend
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConvertUnitsResponse {
    /// Numeric result, `None` when the conversion failed
    pub result: Option<f64>,
    /// Text shown in the result field: "100.00" or an error message
    pub formatted_result: String,
    pub from_unit: String,
    pub to_unit: String,
    pub error: Option<ConversionErrorKind>,
}

/// Failure kind reported alongside the display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConversionErrorKind {
    InvalidInput,
    ConversionNotPossible,
}

impl From<ConversionError> for ConversionErrorKind {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidInput => ConversionErrorKind::InvalidInput,
            ConversionError::ConversionNotPossible => ConversionErrorKind::ConversionNotPossible,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParseUnitResponse {
    pub amount: f64,
    pub unit: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GetUnitsResponse {
    pub category: Category,
    pub label: String,
    pub units: Vec<UnitDTO>,
    pub default_from_unit: String,
    pub default_to_unit: String,
}

// Unit Data Transfer Object for the selectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitDTO {
    pub id: String,    // Unit identifier (e.g., "cm", "celsius")
    pub label: String, // Display name (e.g., "Centimeters")
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
}
