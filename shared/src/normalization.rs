//! Request normalization
//!
//! Turns an arbitrary JSON object into a city name plus soil readings.
//! Numeric fields never fail: anything that cannot be read as a number is
//! replaced by the field default and reported in `defaulted`. Parsed values
//! such as `"inf"` or `"nan"` are kept as-is.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{SoilField, SoilReadings};

/// Request keys accepted for the city, in lookup order
pub const CITY_ALIASES: [&str; 2] = ["city", "City"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// A prediction request after alias resolution and coercion
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    pub city: String,
    pub soil: SoilReadings,
    /// Soil fields that fell back to their default value
    pub defaulted: Vec<SoilField>,
}

/// Normalize a request body.
///
/// Soil fields are resolved before the city check, so a request missing its
/// city is rejected only after every numeric field has been read.
pub fn normalize_request(body: &Map<String, Value>) -> Result<NormalizedRequest, RequestError> {
    let (soil, defaulted) = normalize_soil(body);
    let city = resolve_city(body).ok_or(RequestError::MissingField("city"))?;

    Ok(NormalizedRequest {
        city,
        soil,
        defaulted,
    })
}

/// Resolve the four soil fields, returning the readings and the fields that
/// were defaulted.
pub fn normalize_soil(body: &Map<String, Value>) -> (SoilReadings, Vec<SoilField>) {
    let mut soil = SoilReadings::default();
    let mut defaulted = Vec::new();

    for field in SoilField::ALL {
        match first_present(body, field.aliases()).and_then(coerce_number) {
            Some(value) => soil = soil.with(field, value),
            None => defaulted.push(field),
        }
    }

    (soil, defaulted)
}

/// First non-empty string city under any accepted key, trimmed
pub fn resolve_city(body: &Map<String, Value>) -> Option<String> {
    CITY_ALIASES
        .iter()
        .filter_map(|key| body.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|city| !city.is_empty())
        .map(str::to_string)
}

/// Value under the first alias that is present and not null
fn first_present<'a>(body: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|key| body.get(*key))
        .find(|value| !value.is_null())
}

/// Read a JSON value as a float.
///
/// Numbers pass through, strings are trimmed and parsed, booleans map to
/// 1.0/0.0. Everything else yields `None`. Infinities and NaN parsed from
/// strings are valid readings.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}
