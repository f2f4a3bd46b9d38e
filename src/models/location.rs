//! Location model echoed back with forecasts

use serde::{Deserialize, Serialize};

/// Coordinates a forecast was requested for
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastLocation {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// IANA timezone resolved by the provider, if it reported one
    pub timezone: Option<String>,
}

impl ForecastLocation {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, timezone: Option<String>) -> Self {
        Self {
            latitude,
            longitude,
            timezone,
        }
    }
}
