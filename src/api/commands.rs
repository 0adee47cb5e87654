//! Command handlers called by the widget frontend
//!
//! Each handler takes and returns the DTOs in `shared::types`, so the
//! frontend works against the generated TypeScript bindings.
//!
//! ## Architecture
//!
//! - `units`: conversion, unit lists and free-text parsing
//! - `settings`: widget startup settings
//! - `system`: frontend log forwarding

pub mod settings;
pub mod system;
pub mod units;
