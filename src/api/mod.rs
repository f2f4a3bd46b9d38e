use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::MSG_WEATHER_REQUIRED;
use crate::forecast::forecast_for_location;
use crate::models::{ForecastReport, OutfitRecommendation};
use crate::outfit::suggest_outfit;
use crate::parse::{parse_coordinate, parse_maybe_number};
use crate::weather::ForecastProvider;

pub mod extract;
pub mod response;

pub use extract::RequestPayload;
pub use response::{ApiError, ApiSuccess, FieldErrors};

/// Shared state of the API handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ForecastProvider>,
}

impl AppState {
    pub fn new(provider: impl ForecastProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/recommend", post(recommend))
        .route("/auto-forecast", post(auto_forecast))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::VERSION,
    })
}

#[instrument(skip_all)]
async fn recommend(
    payload: RequestPayload,
) -> Result<Json<ApiSuccess<OutfitRecommendation>>, ApiError> {
    let weather = payload.text("weather");

    let mut errors = FieldErrors::new();
    if weather.trim().is_empty() {
        errors.insert("weather", MSG_WEATHER_REQUIRED);
    }
    let temperature = errors.check("temperature", parse_maybe_number(payload.get("temperature")));
    let wind_speed = errors.check("windSpeed", parse_maybe_number(payload.get("windSpeed")));

    if !errors.is_empty() {
        info!(?errors, "rejected recommendation request");
        return Err(ApiError::validation(errors));
    }

    let recommendation = suggest_outfit(&weather, temperature.flatten(), wind_speed.flatten())
        .map_err(|err| ApiError::for_field("weather", &err))?;

    Ok(ApiSuccess::json(recommendation))
}

#[instrument(skip_all)]
async fn auto_forecast(
    State(state): State<AppState>,
    payload: RequestPayload,
) -> Result<Json<ApiSuccess<ForecastReport>>, ApiError> {
    let mut errors = FieldErrors::new();
    let latitude = errors.check("latitude", parse_coordinate(payload.get("latitude")));
    let longitude = errors.check("longitude", parse_coordinate(payload.get("longitude")));

    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        info!(?errors, "rejected forecast request");
        return Err(ApiError::validation(errors));
    };

    let report = forecast_for_location(state.provider.as_ref(), latitude, longitude)
        .await
        .map_err(|err| {
            warn!(error = %err, latitude, longitude, "forecast lookup failed");
            ApiError::from(err)
        })?;

    Ok(ApiSuccess::json(report))
}
