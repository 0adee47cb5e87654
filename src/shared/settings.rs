use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::core::features::unit_converter::Category;
use crate::shared::error::AppResult;

/// Startup selection for the converter widget
///
/// Missing fields fall back to the defaults: length, `cm` → `m`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ConverterSettings {
    pub default_category: Category,
    pub default_from_unit: Option<String>,
    pub default_to_unit: Option<String>,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            default_category: Category::Length,
            default_from_unit: None,
            default_to_unit: None,
        }
    }
}

impl ConverterSettings {
    pub fn from_json(content: &str) -> AppResult<Self> {
        let settings: Self = serde_json::from_str(content)?;
        log::debug!("[ConverterSettings] Loaded: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// From/to units for the configured category
    ///
    /// A configured unit that does not belong to the category is replaced by the
    /// category's default for that slot.
    pub fn resolved_units(&self) -> (&'static str, &'static str) {
        let category = self.default_category;
        let (default_from, default_to) = category.default_units();

        let pick = |configured: &Option<String>, fallback: &'static str| -> &'static str {
            match configured {
                Some(unit) => match category.units().iter().find(|known| **known == unit.as_str()) {
                    Some(known) => *known,
                    None => {
                        log::warn!(
                            "[ConverterSettings] Unit '{}' is not a {} unit, using '{}'",
                            unit, category, fallback
                        );
                        fallback
                    }
                },
                None => fallback,
            }
        };

        (
            pick(&self.default_from_unit, default_from),
            pick(&self.default_to_unit, default_to),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ConverterSettings::default();
        assert_eq!(settings.default_category, Category::Length);
        assert_eq!(settings.resolved_units(), ("cm", "m"));
    }

    #[test]
    fn test_from_json_partial() {
        let settings = ConverterSettings::from_json(r#"{"default_category": "temperature"}"#).unwrap();
        assert_eq!(settings.default_category, Category::Temperature);
        assert_eq!(settings.resolved_units(), ("celsius", "fahrenheit"));
    }

    #[test]
    fn test_from_json_with_units() {
        let settings = ConverterSettings::from_json(
            r#"{"default_category": "volume", "default_from_unit": "gal", "default_to_unit": "l"}"#,
        )
        .unwrap();
        assert_eq!(settings.resolved_units(), ("gal", "l"));
    }

    #[test]
    fn test_foreign_unit_falls_back() {
        let settings = ConverterSettings {
            default_category: Category::Weight,
            default_from_unit: Some("cm".to_string()),
            default_to_unit: Some("mg".to_string()),
        };
        assert_eq!(settings.resolved_units(), ("g", "mg"));
    }

    #[test]
    fn test_from_json_rejects_unknown_category() {
        assert!(ConverterSettings::from_json(r#"{"default_category": "speed"}"#).is_err());
        assert!(ConverterSettings::from_json("not json").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = ConverterSettings {
            default_category: Category::Volume,
            default_from_unit: Some("l".to_string()),
            default_to_unit: None,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(ConverterSettings::from_json(&json).unwrap(), settings);
    }
}
