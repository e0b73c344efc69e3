//! Crop Recommendation Service - Backend
//!
//! Recommends a crop from soil readings (N, P, K, pH) and live weather for a
//! city, using a trained classifier when its artifacts are present and fixed
//! heuristic rules otherwise.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod inference;
pub mod routes;
pub mod services;

pub use crate::config::Config;

use crate::error::ErrorResponse;
use crate::external::{WeatherClient, WeatherLookup};
use crate::inference::ModelArtifacts;
use crate::services::{PredictionEngine, PredictionService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub predictor: Arc<PredictionService>,
}

impl AppState {
    pub fn new(config: Config, predictor: PredictionService) -> Self {
        Self {
            config: Arc::new(config),
            predictor: Arc::new(predictor),
        }
    }

    /// Wire the live weather client and whatever model artifacts are on disk.
    ///
    /// Missing or unusable artifacts select heuristic mode for the lifetime
    /// of the process; they never abort startup.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        if !config.weather.has_api_key() {
            tracing::warn!(
                "Weather API key not configured ({}); every lookup will use synthetic weather",
                crate::config::WEATHER_API_KEY_VAR
            );
        }
        let weather: Arc<dyn WeatherLookup> = Arc::new(WeatherClient::new(&config.weather)?);

        let artifacts = match ModelArtifacts::load(&config.model) {
            Ok(Some(artifacts)) => {
                tracing::info!(classes = artifacts.classes().len(), "Loaded model artifacts");
                Some(artifacts)
            }
            Ok(None) => {
                tracing::warn!("Model artifacts not found. Falling back to heuristics.");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load model artifacts. Falling back to heuristics.");
                None
            }
        };

        let engine = PredictionEngine::from_artifacts(artifacts);
        tracing::info!(mode = engine.mode(), "Prediction engine ready");

        Ok(Self::new(config, PredictionService::new(weather, engine)))
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::api_routes()
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Turn a handler panic into the generic 500 body
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
}
