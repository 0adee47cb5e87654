//! Widget features
//!
//! Each feature exposes plain functions over immutable data; the command layer
//! in `api::commands` wraps them for the frontend.

pub mod unit_converter;
