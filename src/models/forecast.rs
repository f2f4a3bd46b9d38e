//! Daily forecast model with per-day outfit advice

use super::{ForecastLocation, OutfitRecommendation};
use serde::{Deserialize, Serialize};

/// One forecast day together with the advice computed for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Date as reported by the provider (e.g. `2024-05-01`); `None` when
    /// the entry is not a string
    pub date: Option<String>,
    /// Human-readable weather description
    pub weather_text: String,
    /// Provider weather code, if one was reported
    pub weather_code: Option<i64>,
    /// Daily maximum temperature in Celsius
    pub temperature_max: Option<f64>,
    /// Daily minimum temperature in Celsius
    pub temperature_min: Option<f64>,
    /// Daily maximum wind speed
    pub wind_speed: Option<f64>,
    pub recommendation: OutfitRecommendation,
}

impl ForecastDay {
    /// Mean of whichever of max/min temperature are present
    #[must_use]
    pub fn average_temperature(&self) -> Option<f64> {
        average_temperature(self.temperature_max, self.temperature_min)
    }
}

/// Average the present values of `max` and `min`
#[must_use]
pub fn average_temperature(max: Option<f64>, min: Option<f64>) -> Option<f64> {
    match (max, min) {
        (Some(max), Some(min)) => Some((max + min) / 2.0),
        (Some(value), None) | (None, Some(value)) => Some(value),
        (None, None) => None,
    }
}

/// Multi-day forecast returned by the auto-forecast endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub location: ForecastLocation,
    pub days: Vec<ForecastDay>,
}
