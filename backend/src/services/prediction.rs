//! Prediction request orchestration
//!
//! normalize → weather lookup (synthetic fallback) → region/season →
//! engine → response assembly. Every silent substitution along the way is
//! recorded as a [`Diagnostic`].

use chrono::Datelike;
use serde_json::{Map, Value};
use shared::{
    determine_region, determine_season, normalize_request, title_case,
    FeatureVector, PredictionDetails, PredictionResult, Season, SoilField, WeatherSample,
};
use std::sync::Arc;

use crate::error::AppResult;
use crate::external::WeatherLookup;
use crate::services::engine::{PredictionEngine, PredictionSource};

/// A silent substitution made while serving one request
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A soil field was missing or unparseable and took its default
    FieldDefaulted { field: SoilField },
    /// The weather provider gave no data; synthetic conditions were used
    WeatherFallback,
    /// The trained model failed; the fixed fallback crop was used
    InferenceFallback { reason: String },
}

/// Response body plus what happened while producing it
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub result: PredictionResult,
    pub source: PredictionSource,
    pub diagnostics: Vec<Diagnostic>,
}

/// Serves crop predictions. Holds only read-only collaborators.
#[derive(Clone)]
pub struct PredictionService {
    weather: Arc<dyn WeatherLookup>,
    engine: PredictionEngine,
}

impl PredictionService {
    pub fn new(weather: Arc<dyn WeatherLookup>, engine: PredictionEngine) -> Self {
        Self { weather, engine }
    }

    pub fn engine_mode(&self) -> &'static str {
        self.engine.mode()
    }

    /// Produce a recommendation for a request body.
    ///
    /// `month` is the current calendar month (1-12), supplied by the caller
    /// so the season rule stays deterministic.
    pub async fn predict(
        &self,
        body: &Map<String, Value>,
        month: u32,
    ) -> AppResult<PredictionOutcome> {
        let request = normalize_request(body)?;

        let mut diagnostics: Vec<Diagnostic> = request
            .defaulted
            .iter()
            .map(|field| {
                tracing::debug!(%field, default = field.default_value(), "Soil field defaulted");
                Diagnostic::FieldDefaulted { field: *field }
            })
            .collect();

        let weather = match self.weather.lookup(&request.city).await {
            Some(sample) => sample,
            None => {
                tracing::info!(city = %request.city, "Using synthetic weather");
                diagnostics.push(Diagnostic::WeatherFallback);
                WeatherSample::FALLBACK
            }
        };

        let region = determine_region(weather.latitude());
        let season = determine_season(weather.temperature_celsius.value(), month);

        let features = FeatureVector::new(&request.soil, &weather);
        let prediction = self.engine.predict(&features);
        if let Some(reason) = prediction.failure.clone() {
            diagnostics.push(Diagnostic::InferenceFallback { reason });
        }

        let city = title_case(&request.city);
        let crop = title_case(&prediction.crop);
        let reason = build_reason(season, &city, &weather, &crop);

        tracing::info!(
            city = %city,
            crop = %crop,
            %region,
            %season,
            source = ?prediction.source,
            "Prediction served"
        );

        Ok(PredictionOutcome {
            result: PredictionResult {
                city,
                temperature: weather.temperature_celsius,
                humidity: weather.humidity_percent,
                rainfall: weather.rainfall_mm,
                recommended_crop: crop,
                details: PredictionDetails {
                    season,
                    reason,
                    region,
                },
            },
            source: prediction.source,
            diagnostics,
        })
    }
}

/// Human-readable explanation attached to a recommendation
pub fn build_reason(season: Season, city: &str, weather: &WeatherSample, crop: &str) -> String {
    format!(
        "Based on current {} conditions in {}, with temperature {}°C and humidity {}%, the recommended crop is {}.",
        season.as_str().to_lowercase(),
        city,
        weather.temperature_celsius,
        weather.humidity_percent,
        crop
    )
}

/// Current calendar month from the local wall clock
pub fn current_month() -> u32 {
    chrono::Local::now().month()
}
