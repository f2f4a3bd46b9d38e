//! Canonical weather categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weather classes used internally regardless of how the input was phrased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCategory {
    Sunny,
    Cloudy,
    Rainy,
    Storm,
    Snowy,
    Foggy,
    Windy,
    #[default]
    Default,
}

impl WeatherCategory {
    /// Every category, in template order
    pub const ALL: [WeatherCategory; 8] = [
        Self::Sunny,
        Self::Cloudy,
        Self::Rainy,
        Self::Storm,
        Self::Snowy,
        Self::Foggy,
        Self::Windy,
        Self::Default,
    ];

    /// Canonical lowercase name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
            Self::Storm => "storm",
            Self::Snowy => "snowy",
            Self::Foggy => "foggy",
            Self::Windy => "windy",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for strings that are not a canonical category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory;

impl FromStr for WeatherCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(UnknownCategory)
    }
}
