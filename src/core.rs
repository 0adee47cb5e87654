//! Core widget logic
//!
//! Contains the features that back the widget frontend:
//! - `features`: the unit converter (table, engine, parsing, form state)

pub mod features;
