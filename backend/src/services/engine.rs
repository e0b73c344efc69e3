//! Crop prediction engine
//!
//! Two variants, picked once at startup from artifact availability: the
//! trained model, or a fixed set of threshold rules on pH, N and P.

use shared::FeatureVector;
use std::sync::Arc;

use crate::inference::{InferenceError, ModelArtifacts};

/// Label returned when the trained model fails on a request
pub const FALLBACK_CROP: &str = "wheat";

/// How a recommendation was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionSource {
    Model,
    Heuristic,
    /// The trained model failed and the fixed fallback label was used
    ModelFallback,
}

/// A crop label plus its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct CropPrediction {
    pub crop: String,
    pub source: PredictionSource,
    /// Why the model path fell back, when it did
    pub failure: Option<String>,
}

/// A trained scorer mapping a feature vector to a crop label
pub trait CropClassifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> Result<String, InferenceError>;
}

impl CropClassifier for ModelArtifacts {
    fn classify(&self, features: &FeatureVector) -> Result<String, InferenceError> {
        self.predict(features).map(str::to_string)
    }
}

#[derive(Clone)]
pub enum PredictionEngine {
    Trained(Arc<dyn CropClassifier>),
    Heuristic,
}

impl PredictionEngine {
    pub fn from_artifacts(artifacts: Option<ModelArtifacts>) -> Self {
        match artifacts {
            Some(artifacts) => PredictionEngine::Trained(Arc::new(artifacts)),
            None => PredictionEngine::Heuristic,
        }
    }

    /// Short name reported by the health endpoint
    pub fn mode(&self) -> &'static str {
        match self {
            PredictionEngine::Trained(_) => "model",
            PredictionEngine::Heuristic => "heuristic",
        }
    }

    /// Predict a crop label. Never fails: a model error degrades to
    /// [`FALLBACK_CROP`] and is recorded on the result.
    pub fn predict(&self, features: &FeatureVector) -> CropPrediction {
        match self {
            PredictionEngine::Trained(classifier) => match classifier.classify(features) {
                Ok(crop) => CropPrediction {
                    crop,
                    source: PredictionSource::Model,
                    failure: None,
                },
                Err(e) => {
                    tracing::error!(error = ?e, ?features, "Model inference failed, using fallback crop");
                    CropPrediction {
                        crop: FALLBACK_CROP.to_string(),
                        source: PredictionSource::ModelFallback,
                        failure: Some(e.to_string()),
                    }
                }
            },
            PredictionEngine::Heuristic => CropPrediction {
                crop: heuristic_crop(features.ph(), features.nitrogen(), features.phosphorus())
                    .to_string(),
                source: PredictionSource::Heuristic,
                failure: None,
            },
        }
    }
}

/// Rule-based recommendation; first matching rule wins.
///
/// - pH < 6.0 and N > 80: rice
/// - 6.0 <= pH <= 7.5 and P > 40: maize
/// - otherwise: wheat
pub fn heuristic_crop(ph: f64, nitrogen: f64, phosphorus: f64) -> &'static str {
    if ph < 6.0 && nitrogen > 80.0 {
        "rice"
    } else if (6.0..=7.5).contains(&ph) && phosphorus > 40.0 {
        "maize"
    } else {
        FALLBACK_CROP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{DecisionTree, LabelEncoder, MinMaxScaler, RandomForest};
    use shared::{SoilReadings, WeatherSample};

    fn features(nitrogen: f64, phosphorus: f64, ph: f64) -> FeatureVector {
        let soil = SoilReadings {
            nitrogen,
            phosphorus,
            potassium: 40.0,
            ph,
        };
        FeatureVector::new(&soil, &WeatherSample::FALLBACK)
    }

    #[test]
    fn test_heuristic_rules() {
        assert_eq!(heuristic_crop(5.5, 90.0, 0.0), "rice");
        assert_eq!(heuristic_crop(7.0, 0.0, 50.0), "maize");
        assert_eq!(heuristic_crop(8.0, 90.0, 50.0), "wheat");
    }

    #[test]
    fn test_heuristic_boundaries() {
        assert_eq!(heuristic_crop(6.0, 90.0, 41.0), "maize");
        assert_eq!(heuristic_crop(7.5, 0.0, 41.0), "maize");
        assert_eq!(heuristic_crop(7.0, 0.0, 40.0), "wheat");
        assert_eq!(heuristic_crop(5.9, 80.0, 0.0), "wheat");
    }

    #[test]
    fn test_heuristic_engine_reads_feature_columns() {
        let engine = PredictionEngine::Heuristic;
        let prediction = engine.predict(&features(90.0, 42.0, 6.5));
        assert_eq!(prediction.crop, "maize");
        assert_eq!(prediction.source, PredictionSource::Heuristic);
        assert_eq!(engine.mode(), "heuristic");
    }

    #[test]
    fn test_trained_engine_uses_model() {
        let tree = DecisionTree {
            children_left: vec![-1],
            children_right: vec![-1],
            feature: vec![-2],
            threshold: vec![-2.0],
            value: vec![vec![0.0, 3.0]],
        };
        let artifacts = ModelArtifacts::from_parts(
            RandomForest {
                n_features: 7,
                n_classes: 2,
                trees: vec![tree],
            },
            MinMaxScaler {
                min: vec![0.0; 7],
                scale: vec![1.0; 7],
            },
            LabelEncoder {
                classes: vec!["cotton".into(), "jute".into()],
            },
        )
        .unwrap();

        let engine = PredictionEngine::from_artifacts(Some(artifacts));
        let prediction = engine.predict(&features(0.0, 0.0, 7.0));
        assert_eq!(prediction.crop, "jute");
        assert_eq!(prediction.source, PredictionSource::Model);
        assert_eq!(engine.mode(), "model");
    }

    struct BrokenClassifier;

    impl CropClassifier for BrokenClassifier {
        fn classify(&self, _features: &FeatureVector) -> Result<String, InferenceError> {
            Err(InferenceError::UnknownClass { class: 9, known: 2 })
        }
    }

    #[test]
    fn test_model_failure_falls_back_to_wheat() {
        let engine = PredictionEngine::Trained(Arc::new(BrokenClassifier));
        let prediction = engine.predict(&features(90.0, 50.0, 5.0));
        assert_eq!(prediction.crop, FALLBACK_CROP);
        assert_eq!(prediction.source, PredictionSource::ModelFallback);
        assert!(prediction.failure.unwrap().contains("Class index 9"));
    }
}
