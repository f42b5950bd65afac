// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("PayPal authentication failed with status {status}")]
    GatewayAuth { status: u16, body: String },

    #[error("PayPal API call failed with status {status}")]
    GatewayApi {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, body) = match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, json!({ "message": message })),
            AppError::Configuration(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": message }),
            ),
            AppError::GatewayAuth { .. } => (StatusCode::BAD_GATEWAY, json!({ "message": message })),
            // Relay the upstream status where it is a real HTTP error code so
            // the UI can distinguish a rejected order from a broken gateway.
            AppError::GatewayApi { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({ "message": message, "paypal": body }),
            ),
            AppError::Persistence(_) | AppError::HttpClient(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpClient(format!("HTTP request failed: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Persistence(format!("JSON encoding error: {}", err))
    }
}

// Helper conversion functions
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
