//! Add-on catalog models

use serde::{Deserialize, Serialize};

/// Add-on category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddonCategory {
    Transport,
    Wellness,
    Dining,
    Experience,
}

impl AddonCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddonCategory::Transport => "transport",
            AddonCategory::Wellness => "wellness",
            AddonCategory::Dining => "dining",
            AddonCategory::Experience => "experience",
        }
    }

    pub const ALL: [AddonCategory; 4] = [
        AddonCategory::Transport,
        AddonCategory::Wellness,
        AddonCategory::Dining,
        AddonCategory::Experience,
    ];
}

impl std::fmt::Display for AddonCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bookable add-on, id assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Non-negative price in 2-decimal currency units.
    pub price: f64,
    pub currency: String,
    pub category: AddonCategory,
    #[serde(default)]
    pub image: String,
    /// Optional display string, e.g. "45 min".
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, rename = "perPerson")]
    pub per_person: bool,
}

/// Create/update payload (no id; the server assigns it on create).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub currency: String,
    pub category: AddonCategory,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, rename = "perPerson")]
    pub per_person: bool,
}

impl AddonDraft {
    /// Round the price to 2 decimals, the backend's currency precision.
    pub fn normalized(mut self) -> Self {
        self.price = (self.price * 100.0).round() / 100.0;
        self
    }
}

/// Add-on display settings for the booking flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonSettings {
    pub show_addons_step: bool,
    pub group_addons_by_category: bool,
}

impl Default for AddonSettings {
    fn default() -> Self {
        Self {
            show_addons_step: true,
            group_addons_by_category: true,
        }
    }
}

/// Partial update for [`AddonSettings`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_addons_step: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_addons_by_category: Option<bool>,
}

impl AddonSettings {
    pub fn apply_update(&mut self, update: &AddonSettingsUpdate) {
        if let Some(v) = update.show_addons_step {
            self.show_addons_step = v;
        }
        if let Some(v) = update.group_addons_by_category {
            self.group_addons_by_category = v;
        }
    }
}
