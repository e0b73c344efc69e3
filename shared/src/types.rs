//! Common types used across the platform

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::text::format_measure;

/// A weather reading that keeps the number form the provider sent.
///
/// Integer readings (humidity is usually one) serialize and display without
/// a decimal part; fractional readings always show at least one decimal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Measure {
    Whole(i64),
    Fractional(f64),
}

impl Measure {
    pub fn value(&self) -> f64 {
        match *self {
            Measure::Whole(n) => n as f64,
            Measure::Fractional(x) => x,
        }
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Measure::Fractional(value)
    }
}

impl From<i64> for Measure {
    fn from(value: i64) -> Self {
        Measure::Whole(value)
    }
}

impl PartialEq<f64> for Measure {
    fn eq(&self, other: &f64) -> bool {
        self.value() == *other
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Measure::Whole(n) => write!(f, "{}", n),
            Measure::Fractional(x) => f.write_str(&format_measure(x)),
        }
    }
}

/// GPS coordinates reported by the weather provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Coarse agro-climatic region derived from latitude
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Region {
    #[serde(rename = "North India")]
    NorthIndia,
    #[serde(rename = "South India")]
    SouthIndia,
    #[serde(rename = "Central India")]
    CentralIndia,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthIndia => "North India",
            Region::SouthIndia => "South India",
            Region::CentralIndia => "Central India",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Growing season derived from month and temperature
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Season {
    Summer,
    Monsoon,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_keeps_number_form() {
        let whole: Measure = serde_json::from_str("66").unwrap();
        let fractional: Measure = serde_json::from_str("31.2").unwrap();
        let zero_point: Measure = serde_json::from_str("25.0").unwrap();

        assert_eq!(whole, Measure::Whole(66));
        assert_eq!(fractional, Measure::Fractional(31.2));
        assert_eq!(zero_point, Measure::Fractional(25.0));

        assert_eq!(serde_json::to_string(&whole).unwrap(), "66");
        assert_eq!(serde_json::to_string(&zero_point).unwrap(), "25.0");
    }

    #[test]
    fn test_measure_display() {
        assert_eq!(Measure::Whole(66).to_string(), "66");
        assert_eq!(Measure::Fractional(60.0).to_string(), "60.0");
        assert_eq!(Measure::Fractional(31.25).to_string(), "31.25");
        assert_eq!(Measure::Whole(-3).value(), -3.0);
        assert!(Measure::Whole(66) == 66.0);
    }

    #[test]
    fn test_region_serializes_as_label() {
        let json = serde_json::to_string(&Region::CentralIndia).unwrap();
        assert_eq!(json, "\"Central India\"");
    }

    #[test]
    fn test_season_display() {
        assert_eq!(Season::Monsoon.to_string(), "Monsoon");
        assert_eq!(Season::Winter.as_str(), "Winter");
    }
}
