//! Unit conversion functions
//!
//! Converts a value between two units of the same category by pivoting
//! through the category's base unit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::units::{ConversionCategory, Unit};

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Invalid unit '{unit}' for category '{category}'")]
    InvalidUnit {
        unit: String,
        category: ConversionCategory,
    },

    #[error("Invalid conversion category '{0}'")]
    InvalidCategory(String),

    #[error("Invalid value {value}: {reason}")]
    InvalidValue { value: f64, reason: &'static str },
}

impl ConversionError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::InvalidUnit { .. } => "invalid_unit",
            ConversionError::InvalidCategory(_) => "invalid_category",
            ConversionError::InvalidValue { .. } => "invalid_value",
        }
    }

    fn invalid_unit(unit: impl Into<String>, category: ConversionCategory) -> Self {
        ConversionError::InvalidUnit {
            unit: unit.into(),
            category,
        }
    }
}

/// Result type for conversion operations
pub type ConversionOutcome<T> = Result<T, ConversionError>;

/// Convert `value` from one unit to another within `category`
///
/// Both units must belong to `category` and `value` must be finite.
/// Converting a unit to itself returns `value` untouched.
pub fn convert(
    category: ConversionCategory,
    from: Unit,
    to: Unit,
    value: f64,
) -> ConversionOutcome<f64> {
    if !category.contains(from) {
        return Err(ConversionError::invalid_unit(from.as_str(), category));
    }
    if !category.contains(to) {
        return Err(ConversionError::invalid_unit(to.as_str(), category));
    }
    if !value.is_finite() {
        return Err(ConversionError::InvalidValue {
            value,
            reason: "not a finite number",
        });
    }

    if from == to {
        return Ok(value);
    }

    let result = from.scale().convert_to(&to.scale(), value);

    if !result.is_finite() {
        return Err(ConversionError::InvalidValue {
            value,
            reason: "result is out of range",
        });
    }

    Ok(result)
}

/// Convert using raw category and unit names, as received over the wire
///
/// The category is resolved first, then the units, then the value is checked.
pub fn convert_named(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> ConversionOutcome<f64> {
    ConversionRequest::parse(category, from_unit, to_unit, value)?
        .execute()
        .map(|result| result.value)
}

/// A validated conversion request
///
/// Both units are guaranteed to belong to `category`. Deserialization goes
/// through [`ConversionRequest::new`], so it upholds the same invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConversionRequest")]
pub struct ConversionRequest {
    value: f64,
    from_unit: Unit,
    to_unit: Unit,
    category: ConversionCategory,
}

/// Unchecked wire form of [`ConversionRequest`]
#[derive(Deserialize)]
struct RawConversionRequest {
    value: f64,
    from_unit: Unit,
    to_unit: Unit,
    category: ConversionCategory,
}

impl TryFrom<RawConversionRequest> for ConversionRequest {
    type Error = ConversionError;

    fn try_from(raw: RawConversionRequest) -> Result<Self, Self::Error> {
        Self::new(raw.category, raw.from_unit, raw.to_unit, raw.value)
    }
}

impl ConversionRequest {
    pub fn new(
        category: ConversionCategory,
        from_unit: Unit,
        to_unit: Unit,
        value: f64,
    ) -> ConversionOutcome<Self> {
        for unit in [from_unit, to_unit] {
            if !category.contains(unit) {
                return Err(ConversionError::invalid_unit(unit.as_str(), category));
            }
        }

        Ok(Self {
            value,
            from_unit,
            to_unit,
            category,
        })
    }

    /// Build a request from raw names
    pub fn parse(
        category: &str,
        from_unit: &str,
        to_unit: &str,
        value: f64,
    ) -> ConversionOutcome<Self> {
        let category = ConversionCategory::parse(category)
            .ok_or_else(|| ConversionError::InvalidCategory(category.to_string()))?;

        let resolve = |name: &str| {
            Unit::parse(name)
                .filter(|unit| category.contains(*unit))
                .ok_or_else(|| ConversionError::invalid_unit(name.trim(), category))
        };

        Self::new(category, resolve(from_unit)?, resolve(to_unit)?, value)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn from_unit(&self) -> Unit {
        self.from_unit
    }

    pub fn to_unit(&self) -> Unit {
        self.to_unit
    }

    pub fn category(&self) -> ConversionCategory {
        self.category
    }

    pub fn execute(&self) -> ConversionOutcome<ConversionResult> {
        convert(self.category, self.from_unit, self.to_unit, self.value)
            .map(|value| ConversionResult { value })
    }
}

/// The outcome of a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub value: f64,
}
