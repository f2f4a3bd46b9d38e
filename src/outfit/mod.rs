//! Outfit recommendation module
//!
//! - Normalization of free-text weather into canonical categories
//! - Static base templates per category
//! - Temperature and wind adjustments on top of the template

pub mod engine;
pub mod normalizer;
pub mod templates;

pub use engine::{Band, TEMPERATURE_BANDS, WIND_BANDS, select_band, suggest_outfit};
pub use normalizer::{aliases_for, normalize_weather};
pub use templates::{RecommendationTemplate, template_for};
