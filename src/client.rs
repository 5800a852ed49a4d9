//! Remote conversion client
//!
//! Calls a hosted `POST /convert` endpoint. Like the mobile client, any
//! non-2xx status counts as a failed conversion.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::{ConvertRequest, ConvertResponse};

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Conversion failed with status {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone)]
pub struct ConversionClient {
    http: reqwest::Client,
    base_url: String,
}

impl ConversionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the remote service to convert `value`
    pub async fn convert(
        &self,
        conversion_type: &str,
        from_unit: &str,
        to_unit: &str,
        value: f64,
    ) -> Result<f64, ClientError> {
        let body = ConvertRequest {
            value: Some(value),
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            conversion_type: conversion_type.to_string(),
        };

        let response = self
            .http
            .post(format!("{}/convert", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Remote conversion rejected with status {}", status);
            return Err(ClientError::Status(status));
        }

        let data: ConvertResponse = response.json().await?;
        Ok(data.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::build_router;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_convert_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/convert"))
            .and(body_json(json!({
                "value": 0.0,
                "from_unit": "Celsius",
                "to_unit": "Fahrenheit",
                "conversion_type": "temperature",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": 32.0})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ConversionClient::new(format!("{}/", server.uri()));
        let result = client
            .convert("temperature", "Celsius", "Fahrenheit", 0.0)
            .await
            .unwrap();

        assert_eq!(result, 32.0);
    }

    #[tokio::test]
    async fn test_convert_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/convert"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad"})))
            .mount(&server)
            .await;

        let client = ConversionClient::new(server.uri());
        let err = client.convert("length", "Celsius", "cm", 5.0).await.unwrap_err();

        assert!(matches!(err, ClientError::Status(StatusCode::BAD_REQUEST)));
    }

    #[tokio::test]
    async fn test_convert_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/convert"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = ConversionClient::new(server.uri());
        let err = client.convert("length", "meters", "feet", 1.0).await.unwrap_err();

        assert!(matches!(err, ClientError::Http(_)));
    }

    #[tokio::test]
    async fn test_against_local_service() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(AppState::new())).await.unwrap();
        });

        let client = ConversionClient::new(format!("http://{}", addr));

        let result = client.convert("weight", "kg", "pounds", 1.0).await.unwrap();
        assert!((result - 2.20462).abs() < 1e-3);

        let err = client.convert("weight", "kg", "Kelvin", 1.0).await.unwrap_err();
        assert!(matches!(err, ClientError::Status(StatusCode::BAD_REQUEST)));
    }
}
