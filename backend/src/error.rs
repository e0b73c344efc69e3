//! Error handling for the crop recommendation service
//!
//! Client mistakes get a specific message. Everything else collapses into a
//! generic 500 body; the detail goes to the log only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::RequestError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("Missing required field: {0}")]
    MissingField(String),

    // Server errors
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Weather API error: {0}")]
    WeatherApi(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            error: "Internal server error".to_string(),
        }
    }
}

impl From<RequestError> for AppError {
    fn from(err: RequestError) -> Self {
        match err {
            RequestError::MissingField(field) => AppError::MissingField(field.to_string()),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::MissingField(field) => {
                tracing::info!(field = %field, "Rejected request with missing field");
                ErrorResponse {
                    error: format!("Missing required field: {}", field),
                }
            }
            _ => {
                tracing::error!("Error: {:?}", self);
                ErrorResponse::internal()
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
