//! Min-max feature scaler

use serde::Deserialize;

use super::{ArtifactError, InferenceError};

/// Per-feature affine transform `x * scale + min`, as fitted by a min-max scaler
#[derive(Debug, Clone, Deserialize)]
pub struct MinMaxScaler {
    pub min: Vec<f64>,
    pub scale: Vec<f64>,
}

impl MinMaxScaler {
    pub fn width(&self) -> usize {
        self.min.len()
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.min.len() != self.scale.len() {
            return Err(ArtifactError::Shape(format!(
                "scaler has {} offsets but {} scales",
                self.min.len(),
                self.scale.len()
            )));
        }
        Ok(())
    }

    pub fn transform(&self, x: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if x.len() != self.width() {
            return Err(InferenceError::FeatureWidth {
                expected: self.width(),
                actual: x.len(),
            });
        }

        let scaled: Vec<f64> = x
            .iter()
            .zip(self.scale.iter().zip(&self.min))
            .map(|(value, (scale, min))| value * scale + min)
            .collect();

        // The forest cannot route NaN or infinite inputs
        if let Some(column) = scaled.iter().position(|v| !v.is_finite()) {
            return Err(InferenceError::NonFinite { column });
        }

        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_maps_training_range_to_unit_interval() {
        // Fitted on [0, 140] and [5, 45]
        let scaler = MinMaxScaler {
            min: vec![0.0, -5.0 / 40.0],
            scale: vec![1.0 / 140.0, 1.0 / 40.0],
        };
        let scaled = scaler.transform(&[140.0, 5.0]).unwrap();
        assert!((scaled[0] - 1.0).abs() < 1e-12);
        assert!(scaled[1].abs() < 1e-12);
    }

    #[test]
    fn test_transform_rejects_non_finite_values() {
        let scaler = MinMaxScaler {
            min: vec![0.0, 0.0],
            scale: vec![1.0, 1.0],
        };
        assert!(matches!(
            scaler.transform(&[1.0, f64::INFINITY]),
            Err(InferenceError::NonFinite { column: 1 })
        ));
        assert!(matches!(
            scaler.transform(&[f64::NAN, 1.0]),
            Err(InferenceError::NonFinite { column: 0 })
        ));
    }

    #[test]
    fn test_transform_rejects_wrong_width() {
        let scaler = MinMaxScaler {
            min: vec![0.0; 7],
            scale: vec![1.0; 7],
        };
        assert!(scaler.transform(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_validate_rejects_mismatched_lengths() {
        let scaler = MinMaxScaler {
            min: vec![0.0; 7],
            scale: vec![1.0; 6],
        };
        assert!(scaler.validate().is_err());
    }
}
