//! Unit types and conversion constants
//!
//! Provides the four conversion categories, their fixed unit sets, and the
//! per-unit scale used to move a value to and from the category's base unit.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Conversion Constants (to meters)
// ============================================================================

/// Meters per inch
pub const M_PER_INCH: f64 = 0.0254;
/// Meters per centimeter
pub const M_PER_CM: f64 = 0.01;
/// Meters per foot
pub const M_PER_FOOT: f64 = 0.3048;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per pound (international avoirdupois)
pub const G_PER_LB: f64 = 453.592_37;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.349_523_125;

// ============================================================================
// Cooking Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per teaspoon (US)
pub const ML_PER_TSP: f64 = 4.928_921_593_75;
/// Milliliters per tablespoon (US)
pub const ML_PER_TBSP: f64 = 14.786_764_781_25;
/// Milliliters per cup (US)
pub const ML_PER_CUP: f64 = 236.588_236_5;

// ============================================================================
// Temperature Offsets (to Celsius)
// ============================================================================

/// Fahrenheit reading of 0 °C
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
/// Kelvin reading of 0 °C
pub const KELVIN_OFFSET: f64 = 273.15;

/// A family of units that convert among each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionCategory {
    Length,
    Weight,
    Cooking,
    Temperature,
}

impl ConversionCategory {
    /// All categories in display order
    pub const ALL: [ConversionCategory; 4] = [
        ConversionCategory::Length,
        ConversionCategory::Weight,
        ConversionCategory::Cooking,
        ConversionCategory::Temperature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionCategory::Length => "length",
            ConversionCategory::Weight => "weight",
            ConversionCategory::Cooking => "cooking",
            ConversionCategory::Temperature => "temperature",
        }
    }

    /// Parse a category name, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" => Some(ConversionCategory::Length),
            "weight" => Some(ConversionCategory::Weight),
            "cooking" => Some(ConversionCategory::Cooking),
            "temperature" => Some(ConversionCategory::Temperature),
            _ => None,
        }
    }

    /// The fixed unit set of this category, in picker order
    pub fn units(&self) -> &'static [Unit] {
        match self {
            ConversionCategory::Length => &[Unit::Inches, Unit::Cm, Unit::Feet, Unit::Meters],
            ConversionCategory::Weight => &[Unit::Grams, Unit::Kg, Unit::Pounds, Unit::Ounces],
            ConversionCategory::Cooking => &[Unit::Tsp, Unit::Tbsp, Unit::Cups, Unit::Ml],
            ConversionCategory::Temperature => {
                &[Unit::Celsius, Unit::Fahrenheit, Unit::Kelvin]
            }
        }
    }

    /// The pivot unit every conversion in this category passes through
    pub fn base_unit(&self) -> Unit {
        match self {
            ConversionCategory::Length => Unit::Meters,
            ConversionCategory::Weight => Unit::Grams,
            ConversionCategory::Cooking => Unit::Ml,
            ConversionCategory::Temperature => Unit::Celsius,
        }
    }

    pub fn contains(&self, unit: Unit) -> bool {
        unit.category() == *self
    }
}

impl fmt::Display for ConversionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A measurement unit. Every unit belongs to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    // Length
    Inches,
    Cm,
    Feet,
    Meters,
    // Weight
    Grams,
    Kg,
    Pounds,
    Ounces,
    // Cooking
    Tsp,
    Tbsp,
    Cups,
    Ml,
    // Temperature
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    /// Canonical name, as the client spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Inches => "inches",
            Unit::Cm => "cm",
            Unit::Feet => "feet",
            Unit::Meters => "meters",
            Unit::Grams => "grams",
            Unit::Kg => "kg",
            Unit::Pounds => "pounds",
            Unit::Ounces => "ounces",
            Unit::Tsp => "tsp",
            Unit::Tbsp => "tbsp",
            Unit::Cups => "cups",
            Unit::Ml => "ml",
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
        }
    }

    /// Parse a unit name or common alias, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let trimmed = lower.trim();

        match trimmed {
            "inches" | "inch" | "in" => Some(Unit::Inches),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Some(Unit::Cm),
            "feet" | "foot" | "ft" => Some(Unit::Feet),
            "meters" | "meter" | "metres" | "metre" | "m" => Some(Unit::Meters),
            "grams" | "gram" | "g" => Some(Unit::Grams),
            "kg" | "kilogram" | "kilograms" => Some(Unit::Kg),
            "pounds" | "pound" | "lb" | "lbs" => Some(Unit::Pounds),
            "ounces" | "ounce" | "oz" => Some(Unit::Ounces),
            "tsp" | "teaspoon" | "teaspoons" => Some(Unit::Tsp),
            "tbsp" | "tablespoon" | "tablespoons" => Some(Unit::Tbsp),
            "cups" | "cup" => Some(Unit::Cups),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(Unit::Ml),
            "celsius" | "c" => Some(Unit::Celsius),
            "fahrenheit" | "f" => Some(Unit::Fahrenheit),
            "kelvin" | "k" => Some(Unit::Kelvin),
            _ => None,
        }
    }

    pub fn category(&self) -> ConversionCategory {
        match self {
            Unit::Inches | Unit::Cm | Unit::Feet | Unit::Meters => ConversionCategory::Length,
            Unit::Grams | Unit::Kg | Unit::Pounds | Unit::Ounces => ConversionCategory::Weight,
            Unit::Tsp | Unit::Tbsp | Unit::Cups | Unit::Ml => ConversionCategory::Cooking,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => ConversionCategory::Temperature,
        }
    }

    /// How a value in this unit maps onto the category's base unit
    pub fn scale(&self) -> Scale {
        match self {
            Unit::Inches => Scale::Factor(M_PER_INCH),
            Unit::Cm => Scale::Factor(M_PER_CM),
            Unit::Feet => Scale::Factor(M_PER_FOOT),
            Unit::Meters => Scale::Factor(1.0),
            Unit::Grams => Scale::Factor(1.0),
            Unit::Kg => Scale::Factor(G_PER_KG),
            Unit::Pounds => Scale::Factor(G_PER_LB),
            Unit::Ounces => Scale::Factor(G_PER_OZ),
            Unit::Tsp => Scale::Factor(ML_PER_TSP),
            Unit::Tbsp => Scale::Factor(ML_PER_TBSP),
            Unit::Cups => Scale::Factor(ML_PER_CUP),
            Unit::Ml => Scale::Factor(1.0),
            Unit::Celsius => Scale::Affine {
                offset: 0.0,
                numerator: 1.0,
                denominator: 1.0,
            },
            Unit::Fahrenheit => Scale::Affine {
                offset: FAHRENHEIT_OFFSET,
                numerator: 5.0,
                denominator: 9.0,
            },
            Unit::Kelvin => Scale::Affine {
                offset: KELVIN_OFFSET,
                numerator: 1.0,
                denominator: 1.0,
            },
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Unit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Unit::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown unit '{}'", s)))
    }
}

/// Mapping between a unit and its category's base unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// `base = value * factor`
    Factor(f64),
    /// `base = (value - offset) * numerator / denominator`
    ///
    /// The ratio is kept as two terms so that e.g. 212 °F lands on exactly 100 °C.
    Affine {
        offset: f64,
        numerator: f64,
        denominator: f64,
    },
}

impl Scale {
    pub fn to_base(&self, value: f64) -> f64 {
        match *self {
            Scale::Factor(factor) => value * factor,
            Scale::Affine {
                offset,
                numerator,
                denominator,
            } => mul_div(value - offset, numerator, denominator),
        }
    }

    pub fn from_base(&self, base: f64) -> f64 {
        match *self {
            Scale::Factor(factor) => base / factor,
            Scale::Affine {
                offset,
                numerator,
                denominator,
            } => mul_div(base, denominator, numerator) + offset,
        }
    }

    /// Convert `value` from this scale to `target` through the shared base
    ///
    /// Two factors are applied as `value * from / to` without materializing
    /// the base value, which may overflow when the result does not.
    pub fn convert_to(&self, target: &Scale, value: f64) -> f64 {
        match (*self, *target) {
            (Scale::Factor(from), Scale::Factor(to)) => mul_div(value, from, to),
            _ => target.from_base(self.to_base(value)),
        }
    }
}

/// `value * mul / div`, dividing first when the product alone would overflow
fn mul_div(value: f64, mul: f64, div: f64) -> f64 {
    if mul > 1.0 && value.abs() > f64::MAX / mul {
        value / div * mul
    } else {
        value * mul / div
    }
}
