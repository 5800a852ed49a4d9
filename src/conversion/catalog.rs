//! Category catalog
//!
//! Describes each conversion category the way a client presents it: title,
//! icon, short description, unit list and the default unit pair.

use serde::Serialize;

use super::units::{ConversionCategory, Unit};

/// Display metadata for one conversion category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryInfo {
    #[serde(rename = "type")]
    pub category: ConversionCategory,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub units: Vec<Unit>,
    pub default_from: Unit,
    pub default_to: Unit,
}

impl ConversionCategory {
    pub fn title(&self) -> &'static str {
        match self {
            ConversionCategory::Length => "Length",
            ConversionCategory::Weight => "Weight",
            ConversionCategory::Cooking => "Cooking",
            ConversionCategory::Temperature => "Temperature",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ConversionCategory::Length => "📏",
            ConversionCategory::Weight => "⚖️",
            ConversionCategory::Cooking => "🍳",
            ConversionCategory::Temperature => "🌡️",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConversionCategory::Length => "Meters, Feet, Inches...",
            ConversionCategory::Weight => "Kilograms, Pounds, Ounces...",
            ConversionCategory::Cooking => "Cups, Tablespoons, Milliliters...",
            ConversionCategory::Temperature => "Celsius, Fahrenheit, Kelvin...",
        }
    }

    /// Initial (from, to) pair: the first two units of the list
    pub fn default_units(&self) -> (Unit, Unit) {
        let units = self.units();
        let from = units[0];
        let to = units.get(1).copied().unwrap_or(from);
        (from, to)
    }
}

/// Catalog entry for a single category
pub fn category_info(category: ConversionCategory) -> CategoryInfo {
    let (default_from, default_to) = category.default_units();

    CategoryInfo {
        category,
        title: category.title(),
        icon: category.icon(),
        description: category.description(),
        units: category.units().to_vec(),
        default_from,
        default_to,
    }
}

/// Catalog of all categories, in display order
pub fn catalog() -> Vec<CategoryInfo> {
    ConversionCategory::ALL.into_iter().map(category_info).collect()
}
