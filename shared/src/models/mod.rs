//! Domain models for the crop recommendation service

mod prediction;
mod soil;
mod weather;

pub use prediction::*;
pub use soil::*;
pub use weather::*;
