//! Settings command module
//!
//! Resolves the widget's startup selection. Settings come in as JSON from the
//! host; nothing is persisted.

use crate::shared::error::AppResult;
use crate::shared::settings::ConverterSettings;

/// Parse widget settings, falling back to defaults when none are given
pub fn get_unit_settings_command(json: Option<&str>) -> AppResult<ConverterSettings> {
    match json {
        Some(content) => ConverterSettings::from_json(content),
        None => Ok(ConverterSettings::default()),
    }
}
