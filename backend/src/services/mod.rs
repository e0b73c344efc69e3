//! Business logic services for the crop recommendation service

pub mod engine;
pub mod prediction;

pub use engine::{heuristic_crop, CropClassifier, CropPrediction, PredictionEngine, PredictionSource};
pub use prediction::{current_month, Diagnostic, PredictionOutcome, PredictionService};
