//! Forecast providers
//!
//! The advisor only needs a provider's raw daily-series payload; turning it
//! into per-day advice is the job of [`crate::forecast`].

use async_trait::async_trait;
use serde_json::Value;

use crate::Result;

pub mod open_meteo;

pub use open_meteo::{OpenMeteoClient, describe_weather_code};

/// Source of multi-day forecasts looked up by coordinate
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the raw daily forecast payload for a coordinate.
    ///
    /// Fails with `ProviderUnavailable` on transport errors, non-success
    /// status codes or bodies that are not JSON. The payload shape is not
    /// checked here.
    async fn fetch_daily(&self, latitude: f64, longitude: f64) -> Result<Value>;
}
