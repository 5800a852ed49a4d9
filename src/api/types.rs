//! Wire types for the HTTP API

use serde::{Deserialize, Serialize};

use crate::build_info::BuildInfo;

/// Body of `POST /convert`
///
/// `value` is optional because a client that fails to parse its input
/// serializes NaN as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub value: Option<f64>,
    pub from_unit: String,
    pub to_unit: String,
    pub conversion_type: String,
}

/// Successful response of `POST /convert`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub result: f64,
}

/// Error body for rejected requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    #[serde(flatten)]
    pub build: BuildInfo,
    pub started_at: String,
    pub uptime_seconds: i64,
}
