//! Outfit recommendation model and display methods

use serde::{Deserialize, Serialize};
use std::fmt;

/// Clothing advice produced for one weather situation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    /// Main outfit description
    pub outfit: String,
    /// Suggested accessories, never containing duplicates
    pub accessories: Vec<String>,
    /// Practical tips, in the order they were added
    pub tips: Vec<String>,
}

impl OutfitRecommendation {
    #[must_use]
    pub fn new(outfit: impl Into<String>) -> Self {
        Self {
            outfit: outfit.into(),
            accessories: Vec::new(),
            tips: Vec::new(),
        }
    }

    /// Add an accessory unless it is already suggested.
    /// Returns whether it was added.
    pub fn add_accessory(&mut self, accessory: &str) -> bool {
        if self.has_accessory(accessory) {
            return false;
        }
        self.accessories.push(accessory.to_string());
        true
    }

    #[must_use]
    pub fn has_accessory(&self, accessory: &str) -> bool {
        self.accessories.iter().any(|a| a == accessory)
    }

    pub fn add_tip(&mut self, tip: &str) {
        self.tips.push(tip.to_string());
    }

    pub fn replace_outfit(&mut self, outfit: &str) {
        self.outfit = outfit.to_string();
    }
}

impl fmt::Display for OutfitRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "推荐穿搭：{}", self.outfit)?;
        if !self.accessories.is_empty() {
            write!(f, "\n建议搭配：{}", self.accessories.join("、"))?;
        }
        if !self.tips.is_empty() {
            write!(f, "\n贴心提示：{}", self.tips.join("；"))?;
        }
        Ok(())
    }
}
