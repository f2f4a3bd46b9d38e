//! Maps free-text weather descriptions onto canonical categories

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::WeatherCategory;
use crate::{AdvisorError, Result};

/// Common phrasings of each category.
const ALIASES: &[(&str, WeatherCategory)] = &[
    ("晴", WeatherCategory::Sunny),
    ("晴天", WeatherCategory::Sunny),
    ("晴朗", WeatherCategory::Sunny),
    ("多云", WeatherCategory::Cloudy),
    ("阴", WeatherCategory::Cloudy),
    ("阴天", WeatherCategory::Cloudy),
    ("雨", WeatherCategory::Rainy),
    ("下雨", WeatherCategory::Rainy),
    ("小雨", WeatherCategory::Rainy),
    ("大雨", WeatherCategory::Rainy),
    ("雷阵雨", WeatherCategory::Storm),
    ("暴雨", WeatherCategory::Storm),
    ("雪", WeatherCategory::Snowy),
    ("下雪", WeatherCategory::Snowy),
    ("大雪", WeatherCategory::Snowy),
    ("小雪", WeatherCategory::Snowy),
    ("雾", WeatherCategory::Foggy),
    ("雾霾", WeatherCategory::Foggy),
    ("风", WeatherCategory::Windy),
    ("大风", WeatherCategory::Windy),
    ("沙尘", WeatherCategory::Windy),
    ("沙尘暴", WeatherCategory::Windy),
];

static ALIAS_TABLE: LazyLock<HashMap<&'static str, WeatherCategory>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// Normalize a weather description.
///
/// Fails only for empty or whitespace-only input; anything unrecognized
/// becomes [`WeatherCategory::Default`].
pub fn normalize_weather(weather: &str) -> Result<WeatherCategory> {
    let trimmed = weather.trim();
    if trimmed.is_empty() {
        return Err(AdvisorError::invalid_weather());
    }

    let key = trimmed.to_lowercase();
    let category = ALIAS_TABLE
        .get(key.as_str())
        .copied()
        .or_else(|| key.parse().ok())
        .unwrap_or_default();

    tracing::trace!(input = weather, %category, "normalized weather");
    Ok(category)
}

/// All aliases known for `category`
#[must_use]
pub fn aliases_for(category: WeatherCategory) -> Vec<&'static str> {
    ALIASES
        .iter()
        .filter(|(_, c)| *c == category)
        .map(|(alias, _)| *alias)
        .collect()
}
