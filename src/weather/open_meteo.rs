//! Open-Meteo forecast client
//!
//! Requests a daily series (weather code, max/min temperature, max wind
//! speed) for a coordinate. No API key is required. Requests are bounded by
//! the configured timeout and never retried.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::ForecastProvider;
use crate::config::ForecastConfig;
use crate::error::{MSG_PROVIDER_INVALID_BODY, MSG_PROVIDER_UNAVAILABLE};
use crate::models::WeatherCategory;
use crate::{AdvisorError, Result};

/// Daily variables requested from Open-Meteo
pub const DAILY_VARIABLES: &str =
    "weathercode,temperature_2m_max,temperature_2m_min,windspeed_10m_max";

const UNKNOWN_WEATHER: &str = "未知天气";

/// Client for the Open-Meteo forecast endpoint
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
    forecast_days: u32,
}

impl OpenMeteoClient {
    /// Create a client from the forecast configuration
    pub fn new(config: &ForecastConfig) -> Result<Self> {
        Self::with_base_url(&config.base_url, config.timeout(), config.forecast_days)
    }

    /// Create a client against an explicit base URL (e.g. a mock server)
    pub fn with_base_url(base_url: &str, timeout: Duration, forecast_days: u32) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("outfit-advisor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AdvisorError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            forecast_days,
        })
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url)
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn fetch_daily(&self, latitude: f64, longitude: f64) -> Result<Value> {
        let start_time = Instant::now();
        let url = self.forecast_url();
        debug!("OpenMeteo API request URL: {}", url);

        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("daily", DAILY_VARIABLES.to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", self.forecast_days.to_string()),
        ];

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                warn!(error = %e, "OpenMeteo request failed");
                AdvisorError::provider_unavailable(MSG_PROVIDER_UNAVAILABLE)
            })?;

        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, "Failed to read OpenMeteo response body");
            AdvisorError::provider_unavailable(MSG_PROVIDER_UNAVAILABLE)
        })?;

        let payload: Value = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "OpenMeteo returned a body that is not JSON");
            AdvisorError::provider_unavailable(MSG_PROVIDER_INVALID_BODY)
        })?;

        let total_duration = start_time.elapsed();
        info!(
            "Retrieved daily forecast in {:.3}s",
            total_duration.as_secs_f64()
        );
        if total_duration.as_secs() > 5 {
            warn!(
                "Slow API response detected: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(payload)
    }
}

/// Map an Open-Meteo (WMO) weather code to a category and a description.
/// Missing or unknown codes map to the default category.
#[must_use]
pub fn describe_weather_code(code: Option<i64>) -> (WeatherCategory, &'static str) {
    use WeatherCategory::*;

    let Some(code) = code else {
        return (Default, UNKNOWN_WEATHER);
    };

    match code {
        0 => (Sunny, "晴"),
        1 => (Sunny, "晴间少云"),
        2 => (Cloudy, "多云"),
        3 => (Cloudy, "阴"),
        45 => (Foggy, "雾"),
        48 => (Foggy, "雾凇"),
        51 => (Rainy, "小毛毛雨"),
        53 => (Rainy, "毛毛雨"),
        55 => (Rainy, "大毛毛雨"),
        56 | 57 => (Rainy, "冻毛毛雨"),
        61 => (Rainy, "小雨"),
        63 => (Rainy, "中雨"),
        65 => (Rainy, "大雨"),
        66 | 67 => (Rainy, "冻雨"),
        71 => (Snowy, "小雪"),
        73 => (Snowy, "中雪"),
        75 => (Snowy, "大雪"),
        77 => (Snowy, "米雪"),
        80 | 81 => (Rainy, "阵雨"),
        82 => (Storm, "强阵雨"),
        85 | 86 => (Snowy, "阵雪"),
        95 => (Storm, "雷阵雨"),
        96 | 99 => (Storm, "雷阵雨伴有冰雹"),
        _ => (Default, UNKNOWN_WEATHER),
    }
}
