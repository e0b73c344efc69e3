//! Weather data models

use serde::{Deserialize, Serialize};

use crate::types::{GpsCoordinates, Measure};

/// Current conditions for a city, as used by the prediction path
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherSample {
    pub temperature_celsius: Measure,
    pub humidity_percent: Measure,
    /// Rainfall over the last hour, 0 when the provider reports none
    pub rainfall_mm: Measure,
    pub location: GpsCoordinates,
}

impl WeatherSample {
    /// Synthetic conditions substituted when the provider gives no data
    pub const FALLBACK: WeatherSample = WeatherSample {
        temperature_celsius: Measure::Fractional(25.0),
        humidity_percent: Measure::Fractional(60.0),
        rainfall_mm: Measure::Fractional(50.0),
        location: GpsCoordinates {
            latitude: 20.0,
            longitude: 78.0,
        },
    };

    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }
}
