//! Turns a provider's daily forecast series into per-day outfit advice
//!
//! The payload is read leniently: a malformed element at one index becomes a
//! missing value for that day. Only a missing `daily` object fails the whole
//! conversion.

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::models::forecast::average_temperature;
use crate::models::{ForecastDay, ForecastLocation, ForecastReport};
use crate::outfit::suggest_outfit;
use crate::weather::{ForecastProvider, describe_weather_code};
use crate::{AdvisorError, Result};

/// Maximum number of days turned into advice
pub const MAX_FORECAST_DAYS: usize = 7;

/// Build one [`ForecastDay`] per date in the payload's daily series.
#[instrument(level = "debug", skip(payload))]
pub fn build_forecast_days(payload: &Value) -> Result<Vec<ForecastDay>> {
    let Some(daily) = payload.get("daily").and_then(Value::as_object) else {
        warn!("Provider payload has no daily series");
        return Err(AdvisorError::provider_data_invalid());
    };

    let dates = series(daily, "time");
    let codes = series(daily, "weathercode");
    let temps_max = series(daily, "temperature_2m_max");
    let temps_min = series(daily, "temperature_2m_min");
    let winds = series(daily, "windspeed_10m_max");

    let mut days = Vec::with_capacity(dates.len().min(MAX_FORECAST_DAYS));
    for (index, date) in dates.iter().take(MAX_FORECAST_DAYS).enumerate() {
        let weather_code = int_at(codes, index);
        let (category, description) = describe_weather_code(weather_code);

        let temperature_max = float_at(temps_max, index);
        let temperature_min = float_at(temps_min, index);
        let wind_speed = float_at(winds, index);

        let recommendation = suggest_outfit(
            category.as_str(),
            average_temperature(temperature_max, temperature_min),
            wind_speed,
        )?;

        days.push(ForecastDay {
            date: date.as_str().map(str::to_string),
            weather_text: description.to_string(),
            weather_code,
            temperature_max,
            temperature_min,
            wind_speed,
            recommendation,
        });
    }

    debug!(days = days.len(), "built forecast days");
    Ok(days)
}

/// Fetch a forecast for a coordinate and attach advice to every day.
#[instrument(skip(provider))]
pub async fn forecast_for_location(
    provider: &dyn ForecastProvider,
    latitude: f64,
    longitude: f64,
) -> Result<ForecastReport> {
    let payload = provider.fetch_daily(latitude, longitude).await?;
    let days = build_forecast_days(&payload)?;
    if days.is_empty() {
        return Err(AdvisorError::provider_data_empty());
    }

    let timezone = payload
        .get("timezone")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(ForecastReport {
        location: ForecastLocation::new(latitude, longitude, timezone),
        days,
    })
}

fn series<'a>(daily: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    daily
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn float_at(values: &[Value], index: usize) -> Option<f64> {
    match values.get(index)? {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}

fn int_at(values: &[Value], index: usize) -> Option<i64> {
    match values.get(index)? {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}
