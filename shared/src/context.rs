//! Contextual labels derived from weather data
//!
//! Both functions are pure. The season rule needs the current calendar month;
//! callers read the clock at the request boundary and pass it in.

use crate::types::{Region, Season};

/// Latitude above which a location counts as North India
pub const NORTH_LATITUDE_THRESHOLD: f64 = 23.5;

/// Lowest latitude of the South India band (inclusive)
pub const SOUTH_LATITUDE_FLOOR: f64 = 8.0;

/// Map a latitude onto a region label.
///
/// `lat > 23.5` is North India, `8.0 <= lat <= 23.5` is South India, and
/// everything else (including NaN) falls into Central India.
pub fn determine_region(latitude: f64) -> Region {
    if latitude > NORTH_LATITUDE_THRESHOLD {
        Region::NorthIndia
    } else if (SOUTH_LATITUDE_FLOOR..=NORTH_LATITUDE_THRESHOLD).contains(&latitude) {
        Region::SouthIndia
    } else {
        Region::CentralIndia
    }
}

/// Map a temperature (°C) and calendar month (1-12) onto a season label.
///
/// March to June above 28°C is Summer, July to October at or above 20°C is
/// Monsoon, anything else is Winter. First matching rule wins.
pub fn determine_season(temperature: f64, month: u32) -> Season {
    if (3..=6).contains(&month) && temperature > 28.0 {
        Season::Summer
    } else if (7..=10).contains(&month) && temperature >= 20.0 {
        Season::Monsoon
    } else {
        Season::Winter
    }
}
