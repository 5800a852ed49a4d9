//! API Routes
//!
//! HTTP endpoints for the conversion engine and its category catalog.

mod types;

#[cfg(test)]
mod tests;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::conversion::{
    self, CategoryInfo, ConversionCategory, ConversionError, ConversionRequest,
};
use crate::state::AppState;

pub use types::{ConvertRequest, ConvertResponse, ErrorResponse, StatusResponse};

/// Conversion and catalog routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/convert", post(convert))
        .route("/categories", get(list_categories))
        .route("/categories/:category", get(get_category))
        .route("/status", get(get_status))
}

/// Full application: routes, health check, fallback and middleware
pub fn build_router(state: AppState) -> Router {
    router()
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Engine error surfaced over HTTP
#[derive(Debug)]
pub struct ApiError(ConversionError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ConversionError::InvalidUnit { .. }
            | ConversionError::InvalidCategory(_)
            | ConversionError::InvalidValue { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.0.to_string(),
            kind: self.0.kind().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub async fn convert(
    Json(payload): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    // A missing value is only reported once the category and units check out
    let value = payload.value.unwrap_or(f64::NAN);

    let outcome = ConversionRequest::parse(
        &payload.conversion_type,
        &payload.from_unit,
        &payload.to_unit,
        value,
    )
    .and_then(|request| request.execute());

    match outcome {
        Ok(result) => {
            tracing::debug!(
                "Converted {} {} -> {} {} ({})",
                value,
                payload.from_unit,
                result.value,
                payload.to_unit,
                payload.conversion_type
            );
            Ok(Json(ConvertResponse {
                result: result.value,
            }))
        }
        Err(e) => {
            tracing::warn!(kind = e.kind(), "Rejected conversion: {}", e);
            Err(e.into())
        }
    }
}

pub async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(conversion::catalog())
}

pub async fn get_category(Path(name): Path<String>) -> Result<Json<CategoryInfo>, ApiError> {
    let category = ConversionCategory::parse(&name)
        .ok_or_else(|| ConversionError::InvalidCategory(name.clone()))?;
    Ok(Json(conversion::category_info(category)))
}

pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        build: state.build_info().clone(),
        started_at: state.start_time().to_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
    })
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Not found"})))
}
