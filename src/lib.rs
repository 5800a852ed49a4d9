//! Unit Converter Library
//!
//! Conversion engine for length, weight, cooking and temperature units,
//! plus the HTTP service and client that expose it.

pub mod api;
pub mod build_info;
pub mod client;
pub mod config;
pub mod conversion;
pub mod server;
pub mod state;
