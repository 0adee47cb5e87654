//! Unit converter widget core
//!
//! The frontend renders the widget; this crate owns the conversion table, the
//! conversion engine and the selection rules, and exposes them as command
//! handlers that speak serde/ts-rs DTOs.
//!
//! ```
//! use unit_converter_widget::convert;
//!
//! assert_eq!(convert("length", "cm", "m", "100"), "1.00");
//! assert_eq!(convert("length", "cm", "m", "abc"), "Invalid input");
//! ```

pub mod api;
pub mod core;
pub mod shared;

pub use crate::core::features::unit_converter::{
    convert, convert_value, try_convert, units_for, Category, ConverterForm, Rule,
};
pub use crate::shared::{AppError, AppResult, ConversionError};
