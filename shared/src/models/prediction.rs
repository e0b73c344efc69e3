//! Prediction response payload

use serde::{Deserialize, Serialize};

use crate::types::{Measure, Region, Season};

/// Body returned by a successful prediction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub city: String,
    pub temperature: Measure,
    pub humidity: Measure,
    pub rainfall: Measure,
    pub recommended_crop: String,
    pub details: PredictionDetails,
}

/// Context attached to a recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionDetails {
    pub season: Season,
    pub reason: String,
    pub region: Region,
}
