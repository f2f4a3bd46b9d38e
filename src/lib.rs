//! Outfit Advisor - clothing recommendations from weather conditions
//!
//! This library normalizes weather descriptions, applies temperature and
//! wind rules on top of per-category templates, and serves the result over a
//! small JSON API, optionally driven by a 7-day Open-Meteo forecast.

pub mod api;
pub mod config;
pub mod error;
pub mod forecast;
pub mod models;
pub mod outfit;
pub mod parse;
pub mod telemetry;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::AdvisorConfig;
pub use error::AdvisorError;
pub use forecast::{build_forecast_days, forecast_for_location};
pub use models::{ForecastDay, ForecastReport, OutfitRecommendation, WeatherCategory};
pub use outfit::{normalize_weather, suggest_outfit};
pub use weather::{ForecastProvider, OpenMeteoClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AdvisorError>;
