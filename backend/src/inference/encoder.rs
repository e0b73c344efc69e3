//! Label encoder mapping class indexes back to crop names

use serde::Deserialize;

use super::InferenceError;

#[derive(Debug, Clone, Deserialize)]
pub struct LabelEncoder {
    /// Crop labels in class-index order
    pub classes: Vec<String>,
}

impl LabelEncoder {
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn inverse_transform(&self, class: usize) -> Result<&str, InferenceError> {
        self.classes
            .get(class)
            .map(String::as_str)
            .ok_or(InferenceError::UnknownClass {
                class,
                known: self.classes.len(),
            })
    }
}
