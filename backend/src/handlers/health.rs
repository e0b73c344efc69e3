//! Liveness and health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub mode: String,
}

/// Root endpoint
pub async fn root() -> &'static str {
    "🌱 Intelligent Crop Recommendation API (Dynamic Weather, Region, Season) is running!"
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        mode: state.predictor.engine_mode().to_string(),
    })
}
