//! Base outfit templates, one per weather category

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{OutfitRecommendation, WeatherCategory};

/// Advice for a weather category before temperature and wind adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationTemplate {
    pub outfit: &'static str,
    pub accessories: &'static [&'static str],
    pub tips: &'static [&'static str],
}

impl RecommendationTemplate {
    /// Fresh working copy of this template
    #[must_use]
    pub fn to_recommendation(&self) -> OutfitRecommendation {
        let mut recommendation = OutfitRecommendation::new(self.outfit);
        for accessory in self.accessories {
            recommendation.add_accessory(accessory);
        }
        for tip in self.tips {
            recommendation.add_tip(tip);
        }
        recommendation
    }
}

static DEFAULT_TEMPLATE: RecommendationTemplate = RecommendationTemplate {
    outfit: "舒适的分层穿搭，如 T 恤配开衫",
    accessories: &["随身携带一件薄外套以防温差"],
    tips: &["留意实时天气预报，适时增减衣物"],
};

static TEMPLATES: LazyLock<HashMap<WeatherCategory, RecommendationTemplate>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                WeatherCategory::Sunny,
                RecommendationTemplate {
                    outfit: "轻薄长袖或短袖上衣，搭配舒适长裤或裙装",
                    accessories: &["太阳镜", "防晒霜"],
                    tips: &["中午紫外线较强时尽量戴帽子"],
                },
            ),
            (
                WeatherCategory::Cloudy,
                RecommendationTemplate {
                    outfit: "薄外套配长裤，内搭透气上衣",
                    accessories: &["轻便运动鞋"],
                    tips: &["天气多变，出门前留意是否会转雨"],
                },
            ),
            (
                WeatherCategory::Rainy,
                RecommendationTemplate {
                    outfit: "防水外套或带帽雨衣，搭配快干长裤",
                    accessories: &["雨伞", "防水鞋"],
                    tips: &["尽量避免穿布鞋，回家后及时烘干衣物"],
                },
            ),
            (
                WeatherCategory::Storm,
                RecommendationTemplate {
                    outfit: "防水风衣加保暖内搭",
                    accessories: &["长筒雨靴", "防水背包"],
                    tips: &["尽量减少外出，注意雷电安全"],
                },
            ),
            (
                WeatherCategory::Snowy,
                RecommendationTemplate {
                    outfit: "厚实羽绒服或呢大衣，内搭羊毛衫",
                    accessories: &["防滑雪地靴", "保暖手套"],
                    tips: &["外出前在鞋底贴防滑贴，注意路面结冰"],
                },
            ),
            (
                WeatherCategory::Foggy,
                RecommendationTemplate {
                    outfit: "保暖外套配长裤",
                    accessories: &["口罩", "护目镜"],
                    tips: &["雾霾天尽量减少户外运动，回家及时清洁面部"],
                },
            ),
            (
                WeatherCategory::Windy,
                RecommendationTemplate {
                    outfit: "防风外套配长裤",
                    accessories: &["围巾"],
                    tips: &["骑行或长时间户外活动时注意防风保暖"],
                },
            ),
            (WeatherCategory::Default, DEFAULT_TEMPLATE),
        ])
    });

/// Template for `category`, falling back to the default template.
#[must_use]
pub fn template_for(category: WeatherCategory) -> &'static RecommendationTemplate {
    TEMPLATES.get(&category).unwrap_or(&DEFAULT_TEMPLATE)
}
