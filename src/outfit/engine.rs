//! Rule-based outfit recommendation engine
//!
//! A recommendation starts from the category template, then passes through
//! one temperature band and one wind band. Each band table is evaluated in
//! order and only the first matching band applies.

use tracing::{debug, instrument};

use super::normalizer::normalize_weather;
use super::templates::template_for;
use crate::Result;
use crate::models::OutfitRecommendation;

/// Adjustment applied when a band matches
#[derive(Debug)]
pub struct Band {
    pub name: &'static str,
    matches: fn(f64) -> bool,
    /// Replacement outfit, if the band overrides the template's
    pub outfit: Option<&'static str>,
    /// Accessories ensured to be present
    pub accessories: &'static [&'static str],
    pub tip: &'static str,
}

impl Band {
    fn apply(&self, recommendation: &mut OutfitRecommendation) {
        if let Some(outfit) = self.outfit {
            recommendation.replace_outfit(outfit);
        }
        for accessory in self.accessories {
            recommendation.add_accessory(accessory);
        }
        recommendation.add_tip(self.tip);
    }
}

// Order matters: the ranges only partition the line when read first-match-wins.
pub static TEMPERATURE_BANDS: [Band; 5] = [
    Band {
        name: "cold",
        matches: |t| t <= 5.0,
        outfit: Some("保暖羽绒服或厚呢大衣，内搭羊毛衫与保暖裤"),
        accessories: &["保暖帽", "围巾"],
        tip: "室内外温差大时注意及时增减衣物",
    },
    Band {
        name: "cool",
        matches: |t| t <= 15.0,
        outfit: Some("针织衫或卫衣外搭中等厚度外套，下装长裤"),
        accessories: &["薄围巾"],
        tip: "早晚偏凉，可准备一件轻薄内搭",
    },
    Band {
        name: "hot",
        matches: |t| t >= 28.0,
        outfit: Some("透气短袖或无袖上衣，搭配短裤或轻薄长裤"),
        accessories: &["遮阳帽"],
        tip: "多喝水，避免长时间暴晒",
    },
    Band {
        name: "warm",
        matches: |t| t >= 22.0,
        outfit: None,
        accessories: &[],
        tip: "气温较高，选择吸汗面料会更舒适",
    },
    Band {
        name: "mild",
        matches: |_| true,
        outfit: None,
        accessories: &[],
        tip: "气温适中，保持分层穿搭以便调节",
    },
];

// Calm wind (< 5) has no band.
pub static WIND_BANDS: [Band; 2] = [
    Band {
        name: "strong",
        matches: |w| w >= 10.0,
        outfit: None,
        accessories: &["防风外套"],
        tip: "风力较大，外出时注意防风并保护好头部",
    },
    Band {
        name: "breezy",
        matches: |w| w >= 5.0,
        outfit: None,
        accessories: &[],
        tip: "有明显风感，骑行或长时间户外活动时注意防风",
    },
];

/// First band in `bands` matching `value`
#[must_use]
pub fn select_band(bands: &'static [Band], value: f64) -> Option<&'static Band> {
    bands.iter().find(|band| (band.matches)(value))
}

/// Generate clothing advice for a weather description, temperature in
/// Celsius and wind speed.
#[instrument(level = "debug")]
pub fn suggest_outfit(
    weather: &str,
    temperature: Option<f64>,
    wind_speed: Option<f64>,
) -> Result<OutfitRecommendation> {
    let category = normalize_weather(weather)?;
    let mut recommendation = template_for(category).to_recommendation();

    if let Some(band) = temperature.and_then(|t| select_band(&TEMPERATURE_BANDS, t)) {
        debug!(%category, band = band.name, "applying temperature band");
        band.apply(&mut recommendation);
    }

    if let Some(band) = wind_speed.and_then(|w| select_band(&WIND_BANDS, w)) {
        debug!(%category, band = band.name, "applying wind band");
        band.apply(&mut recommendation);
    }

    Ok(recommendation)
}
