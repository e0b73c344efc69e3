//! Trained model artifacts and inference
//!
//! The offline training job exports three JSON files: the random forest, the
//! min-max scaler, and the label encoder. All three are loaded once at
//! startup and are read-only afterwards.

pub mod encoder;
pub mod forest;
pub mod scaler;

use serde::de::DeserializeOwned;
use shared::FeatureVector;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::ModelConfig;

pub use encoder::LabelEncoder;
pub use forest::{DecisionTree, RandomForest};
pub use scaler::MinMaxScaler;

/// Failure to load a usable set of artifacts
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Inconsistent artifact shape: {0}")]
    Shape(String),
}

/// Failure while scoring a single feature vector
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Feature width mismatch: expected {expected}, got {actual}")]
    FeatureWidth { expected: usize, actual: usize },

    #[error("Class index {class} outside encoder range ({known} classes)")]
    UnknownClass { class: usize, known: usize },

    #[error("Forest has no trees")]
    EmptyForest,

    #[error("Feature {column} is not a finite number after scaling")]
    NonFinite { column: usize },
}

/// Classifier, scaler and encoder as a validated unit
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    forest: RandomForest,
    scaler: MinMaxScaler,
    encoder: LabelEncoder,
}

impl ModelArtifacts {
    /// Assemble artifacts, checking they agree with each other and with the
    /// seven-column feature layout.
    pub fn from_parts(
        forest: RandomForest,
        scaler: MinMaxScaler,
        encoder: LabelEncoder,
    ) -> Result<Self, ArtifactError> {
        forest.validate()?;
        scaler.validate()?;

        if scaler.width() != FeatureVector::WIDTH {
            return Err(ArtifactError::Shape(format!(
                "scaler expects {} features, request vectors have {}",
                scaler.width(),
                FeatureVector::WIDTH
            )));
        }
        if forest.n_features != FeatureVector::WIDTH {
            return Err(ArtifactError::Shape(format!(
                "forest expects {} features, request vectors have {}",
                forest.n_features,
                FeatureVector::WIDTH
            )));
        }
        if encoder.len() != forest.n_classes {
            return Err(ArtifactError::Shape(format!(
                "encoder knows {} classes, forest predicts {}",
                encoder.len(),
                forest.n_classes
            )));
        }

        Ok(Self {
            forest,
            scaler,
            encoder,
        })
    }

    /// Load artifacts from the configured directory.
    ///
    /// Returns `Ok(None)` when any of the three files is absent: that is a
    /// mode switch, not an error.
    pub fn load(config: &ModelConfig) -> Result<Option<Self>, ArtifactError> {
        let paths = [config.model_path(), config.scaler_path(), config.encoder_path()];
        let missing: Vec<&PathBuf> = paths.iter().filter(|p| !p.exists()).collect();
        if !missing.is_empty() {
            tracing::info!(?missing, "Model artifacts not found");
            return Ok(None);
        }

        let [model_path, scaler_path, encoder_path] = paths;
        let forest: RandomForest = read_json(&model_path)?;
        let scaler: MinMaxScaler = read_json(&scaler_path)?;
        let encoder: LabelEncoder = read_json(&encoder_path)?;

        Self::from_parts(forest, scaler, encoder).map(Some)
    }

    pub fn classes(&self) -> &[String] {
        &self.encoder.classes
    }

    /// Scale, classify and decode one feature vector
    pub fn predict(&self, features: &FeatureVector) -> Result<&str, InferenceError> {
        let scaled = self.scaler.transform(features.as_slice())?;
        let class = self.forest.predict(&scaled)?;
        self.encoder.inverse_transform(class)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let text = std::fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ArtifactError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
