//! Converter widget selection state
//!
//! Holds what the user has picked in the widget: category, the two units and
//! the raw text of the value field. The frontend owns rendering; this type
//! owns the selection rules (units always belong to the current category).

use super::convert;
use super::table::Category;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::ConverterSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterForm {
    category: Category,
    from_unit: &'static str,
    to_unit: &'static str,
    input: String,
}

impl ConverterForm {
    /// Length, `cm` → `m`, empty value field
    pub fn new() -> Self {
        Self::from_settings(&ConverterSettings::default())
    }

    pub fn from_settings(settings: &ConverterSettings) -> Self {
        let (from_unit, to_unit) = settings.resolved_units();
        Self {
            category: settings.default_category,
            from_unit,
            to_unit,
            input: String::new(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn from_unit(&self) -> &'static str {
        self.from_unit
    }

    pub fn to_unit(&self) -> &'static str {
        self.to_unit
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Units offered by both selectors for the current category
    pub fn unit_options(&self) -> &'static [&'static str] {
        self.category.units()
    }

    /// Switch category and reset both units to its first two listed units
    pub fn set_category(&mut self, category: Category) {
        let (from_unit, to_unit) = category.default_units();
        self.category = category;
        self.from_unit = from_unit;
        self.to_unit = to_unit;
    }

    pub fn set_from_unit(&mut self, unit: &str) -> AppResult<()> {
        self.from_unit = self.resolve_unit(unit)?;
        Ok(())
    }

    pub fn set_to_unit(&mut self, unit: &str) -> AppResult<()> {
        self.to_unit = self.resolve_unit(unit)?;
        Ok(())
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
    }

    /// Text for the result field, recomputed from the current selection
    pub fn result(&self) -> String {
        convert(self.category.as_str(), self.from_unit, self.to_unit, &self.input)
    }

    fn resolve_unit(&self, unit: &str) -> AppResult<&'static str> {
        self.unit_options()
            .iter()
            .find(|known| **known == unit)
            .copied()
            .ok_or_else(|| {
                AppError::Validation(format!("'{}' is not a {} unit", unit, self.category))
            })
    }
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let form = ConverterForm::new();
        assert_eq!(form.category(), Category::Length);
        assert_eq!(form.from_unit(), "cm");
        assert_eq!(form.to_unit(), "m");
        assert_eq!(form.input(), "");
        assert_eq!(form.result(), "Invalid input");
    }

    #[test]
    fn test_category_change_resets_units() {
        let mut form = ConverterForm::new();
        form.set_from_unit("km").unwrap();
        form.set_to_unit("mm").unwrap();

        form.set_category(Category::Temperature);
        assert_eq!(form.from_unit(), "celsius");
        assert_eq!(form.to_unit(), "fahrenheit");

        form.set_category(Category::Volume);
        assert_eq!((form.from_unit(), form.to_unit()), ("l", "ml"));
    }

    #[test]
    fn test_category_change_keeps_input() {
        let mut form = ConverterForm::new();
        form.set_input("100");
        form.set_category(Category::Temperature);
        assert_eq!(form.input(), "100");
        assert_eq!(form.result(), "212.00");
    }

    #[test]
    fn test_rejects_unit_from_other_category() {
        let mut form = ConverterForm::new();
        let err = form.set_from_unit("kg").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(form.from_unit(), "cm");
    }

    #[test]
    fn test_result_follows_selection() {
        let mut form = ConverterForm::new();
        form.set_input("100");
        assert_eq!(form.result(), "1.00");

        form.swap_units();
        assert_eq!(form.from_unit(), "m");
        assert_eq!(form.result(), "10000.00");

        form.set_input("abc");
        assert_eq!(form.result(), "Invalid input");
    }

    #[test]
    fn test_from_settings() {
        let settings = ConverterSettings {
            default_category: Category::Volume,
            default_from_unit: Some("gal".to_string()),
            default_to_unit: Some("l".to_string()),
        };
        let mut form = ConverterForm::from_settings(&settings);
        form.set_input("1");
        assert_eq!(form.result(), "3.79");
    }
}
