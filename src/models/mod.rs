//! Data models for the outfit advisor
//!
//! This module contains the core domain models organized by concern:
//! - Weather: canonical weather categories
//! - Recommendation: the outfit advice produced by the engine
//! - Location: coordinates echoed with forecasts
//! - Forecast: per-day forecast entries and the full report

pub mod forecast;
pub mod location;
pub mod recommendation;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{ForecastDay, ForecastReport};
pub use location::ForecastLocation;
pub use recommendation::OutfitRecommendation;
pub use weather::WeatherCategory;
