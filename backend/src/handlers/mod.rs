//! HTTP handlers

pub mod health;
pub mod prediction;

pub use health::{health_check, root};
pub use prediction::predict_crop;
