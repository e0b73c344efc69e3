//! Context derivation and heuristic rule tests
//!
//! Tests for the pure decision functions including:
//! - Region partitioning by latitude
//! - Season derivation for an injected month
//! - Heuristic rule ordering
//! - Soil normalization totality

use crop_advisor_backend::services::heuristic_crop;
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use shared::{determine_region, determine_season, normalize_soil, Region, Season, SoilReadings};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Representative Indian cities and their bands
    #[test]
    fn test_city_latitudes() {
        let cities = [
            (28.6139, Region::NorthIndia),  // Delhi
            (30.7333, Region::NorthIndia),  // Chandigarh
            (19.0760, Region::SouthIndia),  // Mumbai
            (13.0827, Region::SouthIndia),  // Chennai
            (8.0883, Region::SouthIndia),   // Kanyakumari
            (6.9271, Region::CentralIndia), // Colombo, below the southern floor
        ];

        for (lat, region) in cities {
            assert_eq!(determine_region(lat), region, "latitude {}", lat);
        }
    }

    /// Both ends of the South band are inclusive
    #[test]
    fn test_band_edges() {
        assert_eq!(determine_region(23.5), Region::SouthIndia);
        assert_eq!(determine_region(8.0), Region::SouthIndia);
        assert_eq!(determine_region(-33.9), Region::CentralIndia);
    }

    /// Season windows per month at a fixed warm temperature
    #[test]
    fn test_season_calendar_at_30c() {
        let expected = [
            Season::Winter,  // Jan
            Season::Winter,  // Feb
            Season::Summer,  // Mar
            Season::Summer,  // Apr
            Season::Summer,  // May
            Season::Summer,  // Jun
            Season::Monsoon, // Jul
            Season::Monsoon, // Aug
            Season::Monsoon, // Sep
            Season::Monsoon, // Oct
            Season::Winter,  // Nov
            Season::Winter,  // Dec
        ];

        for (month, season) in (1..=12).zip(expected) {
            assert_eq!(determine_season(30.0, month), season, "month {}", month);
        }
    }

    #[test]
    fn test_heuristic_cases() {
        assert_eq!(heuristic_crop(5.5, 90.0, 0.0), "rice");
        assert_eq!(heuristic_crop(7.0, 0.0, 50.0), "maize");
        assert_eq!(heuristic_crop(5.5, 90.0, 50.0), "rice");
        assert_eq!(heuristic_crop(7.0, 0.0, 0.0), "wheat");
    }

    #[test]
    fn test_heuristic_non_finite_readings() {
        assert_eq!(heuristic_crop(5.0, f64::INFINITY, 0.0), "rice");
        // NaN pH fails every comparison
        assert_eq!(heuristic_crop(f64::NAN, 0.0, 50.0), "wheat");
        assert_eq!(heuristic_crop(f64::NAN, 90.0, 50.0), "wheat");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Strategy for latitudes across the globe
    fn latitude_strategy() -> impl Strategy<Value = f64> {
        -90.0f64..=90.0f64
    }

    /// Strategy for plausible air temperatures
    fn temperature_strategy() -> impl Strategy<Value = f64> {
        -20.0f64..=50.0f64
    }

    /// Strategy for calendar months
    fn month_strategy() -> impl Strategy<Value = u32> {
        1u32..=12u32
    }

    /// Strategy for arbitrary JSON leaves a client might send
    fn json_leaf_strategy() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<f64>().prop_map(|f| json!(f)),
            any::<i64>().prop_map(|i| json!(i)),
            ".*".prop_map(Value::String),
            Just(json!([])),
            Just(json!({})),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every latitude lands in exactly the band its thresholds define
        #[test]
        fn prop_region_partition(lat in latitude_strategy()) {
            let region = determine_region(lat);
            if lat > 23.5 {
                prop_assert_eq!(region, Region::NorthIndia);
            } else if lat >= 8.0 {
                prop_assert_eq!(region, Region::SouthIndia);
            } else {
                prop_assert_eq!(region, Region::CentralIndia);
            }
        }

        /// For a fixed month, season is a deterministic function of temperature
        #[test]
        fn prop_season_is_pure(temp in temperature_strategy(), month in month_strategy()) {
            prop_assert_eq!(determine_season(temp, month), determine_season(temp, month));
        }

        /// Outside March-October the season is always Winter
        #[test]
        fn prop_off_window_months_are_winter(temp in temperature_strategy(), month in prop_oneof![1u32..=2u32, 11u32..=12u32]) {
            prop_assert_eq!(determine_season(temp, month), Season::Winter);
        }

        /// Summer requires the hot-month window and more than 28°C
        #[test]
        fn prop_summer_conditions(temp in temperature_strategy(), month in month_strategy()) {
            let summer = determine_season(temp, month) == Season::Summer;
            prop_assert_eq!(summer, (3..=6).contains(&month) && temp > 28.0);
        }

        /// Rice wins whenever its rule holds, regardless of phosphorus
        #[test]
        fn prop_rice_rule_first(
            ph in 0.0f64..6.0f64,
            nitrogen in 80.001f64..200.0f64,
            phosphorus in 0.0f64..200.0f64
        ) {
            prop_assert_eq!(heuristic_crop(ph, nitrogen, phosphorus), "rice");
        }

        /// Heuristic output is always one of the three crops
        #[test]
        fn prop_heuristic_is_total(
            ph in 0.0f64..14.0f64,
            nitrogen in 0.0f64..200.0f64,
            phosphorus in 0.0f64..200.0f64
        ) {
            let crop = heuristic_crop(ph, nitrogen, phosphorus);
            prop_assert!(matches!(crop, "rice" | "maize" | "wheat"));
        }

        /// Normalization never fails; a field is either read or defaulted
        #[test]
        fn prop_normalization_is_total(
            n in json_leaf_strategy(),
            p in json_leaf_strategy(),
            k in json_leaf_strategy(),
            ph in json_leaf_strategy()
        ) {
            let mut body = Map::new();
            body.insert("N".to_string(), n);
            body.insert("P".to_string(), p);
            body.insert("K".to_string(), k);
            body.insert("pH".to_string(), ph);

            let (soil, defaulted) = normalize_soil(&body);
            for field in defaulted {
                prop_assert_eq!(soil.get(field), field.default_value());
            }
        }

        /// Non-numeric strings always produce the fixed defaults
        #[test]
        fn prop_non_numeric_strings_default(s in "[a-zA-Z ]{0,12}") {
            prop_assume!(s.trim().parse::<f64>().is_err());
            let mut body = Map::new();
            for key in ["N", "P", "K", "ph"] {
                body.insert(key.to_string(), Value::String(s.clone()));
            }

            let (soil, defaulted) = normalize_soil(&body);
            prop_assert_eq!(soil, SoilReadings::default());
            prop_assert_eq!(defaulted.len(), 4);
        }
    }
}
