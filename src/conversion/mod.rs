//! Unit conversion module
//!
//! The conversion engine, its unit tables and the category catalog.

pub mod catalog;
pub mod converter;
pub mod units;

pub use catalog::{catalog, category_info, CategoryInfo};
pub use converter::{
    convert, convert_named, ConversionError, ConversionOutcome, ConversionRequest,
    ConversionResult,
};
pub use units::{ConversionCategory, Scale, Unit};
