//! Shared types and domain logic for the crop recommendation service
//!
//! Everything in this crate is pure: no network, no clock, no files. The
//! backend supplies weather data and the current month at its boundary.

pub mod context;
pub mod models;
pub mod normalization;
pub mod text;
pub mod types;

pub use context::*;
pub use models::*;
pub use normalization::*;
pub use text::*;
pub use types::*;
