//! Weather API client for fetching current conditions by city
//!
//! Integrates with the OpenWeatherMap current-weather endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared::{GpsCoordinates, Measure, WeatherSample};
use std::time::Duration;

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Source of current weather for a city.
///
/// `None` means "no data": the caller substitutes synthetic conditions.
/// Implementations never surface errors.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn lookup(&self, city: &str) -> Option<WeatherSample>;
}

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather.
///
/// Only the fields the prediction path reads. `main` is optional so that a
/// body without it is reported as "no data" rather than a decode failure.
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    main: Option<OWMMain>,
    coord: Option<OWMCoord>,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: Measure,
    humidity: Measure,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "1h")]
    one_hour: Option<Measure>,
}

impl WeatherClient {
    /// Create a new WeatherClient from configuration
    pub fn new(config: &WeatherConfig) -> AppResult<Self> {
        Self::build(
            config.api_key.clone(),
            config.api_endpoint.clone(),
            config.timeout(),
        )
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> AppResult<Self> {
        Self::build(api_key, base_url, Duration::from_secs(10))
    }

    fn build(api_key: String, base_url: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Weather HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current weather conditions by city name
    pub async fn get_current_weather(&self, city: &str) -> AppResult<WeatherSample> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "Weather API key not configured".to_string(),
            ));
        }

        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherApi(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::WeatherApi(format!("{} - {}", status, body)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::WeatherApi(format!("failed to read response: {}", e)))?;

        parse_current_response(&body)
    }
}

#[async_trait]
impl WeatherLookup for WeatherClient {
    async fn lookup(&self, city: &str) -> Option<WeatherSample> {
        match self.get_current_weather(city).await {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::warn!(city = %city, error = %e, "Weather lookup failed");
                None
            }
        }
    }
}

/// Convert an OpenWeatherMap current-weather body to a sample
fn parse_current_response(body: &str) -> AppResult<WeatherSample> {
    let data: OWMCurrentResponse = serde_json::from_str(body)
        .map_err(|e| AppError::WeatherApi(format!("failed to parse weather response: {}", e)))?;

    let main = data
        .main
        .ok_or_else(|| AppError::WeatherApi(format!("response has no main section: {}", body)))?;
    let coord = data
        .coord
        .ok_or_else(|| AppError::WeatherApi("response has no coordinates".to_string()))?;

    Ok(WeatherSample {
        temperature_celsius: main.temp,
        humidity_percent: main.humidity,
        rainfall_mm: data.rain.and_then(|r| r.one_hour).unwrap_or(Measure::Whole(0)),
        location: GpsCoordinates::new(coord.lat, coord.lon),
    })
}
