use serde::Serialize;
use thiserror::Error;

/// Conversion failures shown to the user as the widget's result text
///
/// `Display` renders the exact strings the widget shows.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// Input is empty, non-numeric, NaN or infinite
    #[error("Invalid input")]
    InvalidInput,

    /// No rule exists for the (category, from, to) combination
    #[error("Conversion not possible")]
    ConversionNotPossible,
}

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Calculation Error: {0}")]
    Calculation(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        AppError::Calculation(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(format!("Serialization error: {}", err))
    }
}

// Helper for command results
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::ConversionErrorKind;

    #[test]
    fn test_conversion_error_display() {
        assert_eq!(ConversionError::InvalidInput.to_string(), "Invalid input");
        assert_eq!(ConversionError::ConversionNotPossible.to_string(), "Conversion not possible");
    }

    #[test]
    fn test_app_error_from_conversion_error() {
        let err: AppError = ConversionError::InvalidInput.into();
        assert_eq!(err.to_string(), "Calculation Error: Invalid input");
    }

    #[test]
    fn test_conversion_error_crosses_ipc_as_kind() {
        let kind = ConversionErrorKind::from(ConversionError::ConversionNotPossible);
        assert_eq!(serde_json::to_value(kind).unwrap(), "conversion_not_possible");
    }

    #[test]
    fn test_app_error_serializes_tagged() {
        let err = AppError::Validation("Unknown category: speed".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Validation");
        assert_eq!(json["message"], "Unknown category: speed");
    }
}
