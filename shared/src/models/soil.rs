//! Soil nutrient readings

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four soil inputs accepted by the prediction endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilField {
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
}

impl SoilField {
    pub const ALL: [SoilField; 4] = [
        SoilField::Nitrogen,
        SoilField::Phosphorus,
        SoilField::Potassium,
        SoilField::Ph,
    ];

    /// Request keys accepted for this field, in lookup order
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            SoilField::Nitrogen => &["nitrogen", "Nitrogen", "N"],
            SoilField::Phosphorus => &["phosphorus", "Phosphorus", "P"],
            SoilField::Potassium => &["potassium", "Potassium", "K"],
            SoilField::Ph => &["ph", "pH", "PH"],
        }
    }

    /// Value substituted when the field is missing or unparseable
    pub fn default_value(&self) -> f64 {
        match self {
            SoilField::Ph => 7.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for SoilField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SoilField::Nitrogen => "nitrogen",
            SoilField::Phosphorus => "phosphorus",
            SoilField::Potassium => "potassium",
            SoilField::Ph => "ph",
        };
        f.write_str(name)
    }
}

/// Normalized soil readings (N, P, K, pH)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SoilReadings {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
}

impl SoilReadings {
    pub fn get(&self, field: SoilField) -> f64 {
        match field {
            SoilField::Nitrogen => self.nitrogen,
            SoilField::Phosphorus => self.phosphorus,
            SoilField::Potassium => self.potassium,
            SoilField::Ph => self.ph,
        }
    }

    fn set(&mut self, field: SoilField, value: f64) {
        match field {
            SoilField::Nitrogen => self.nitrogen = value,
            SoilField::Phosphorus => self.phosphorus = value,
            SoilField::Potassium => self.potassium = value,
            SoilField::Ph => self.ph = value,
        }
    }

    pub fn with(mut self, field: SoilField, value: f64) -> Self {
        self.set(field, value);
        self
    }
}

impl Default for SoilReadings {
    fn default() -> Self {
        Self {
            nitrogen: SoilField::Nitrogen.default_value(),
            phosphorus: SoilField::Phosphorus.default_value(),
            potassium: SoilField::Potassium.default_value(),
            ph: SoilField::Ph.default_value(),
        }
    }
}

/// Model input in training column order:
/// N, P, K, temperature, humidity, pH, rainfall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; FeatureVector::WIDTH]);

impl FeatureVector {
    pub const WIDTH: usize = 7;

    pub fn new(soil: &SoilReadings, weather: &crate::WeatherSample) -> Self {
        Self([
            soil.nitrogen,
            soil.phosphorus,
            soil.potassium,
            weather.temperature_celsius.value(),
            weather.humidity_percent.value(),
            soil.ph,
            weather.rainfall_mm.value(),
        ])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn ph(&self) -> f64 {
        self.0[5]
    }

    pub fn nitrogen(&self) -> f64 {
        self.0[0]
    }

    pub fn phosphorus(&self) -> f64 {
        self.0[1]
    }
}
