//! Design/branding settings

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum hero subtext length enforced client-side.
pub const HERO_SUBTEXT_MAX: usize = 200;

/// Built-in booking filters shown to every property.
pub const BUILT_IN_FILTERS: &[(&str, &str)] = &[
    ("includeBreakfast", "Include Breakfast"),
    ("freeCancellation", "Free Cancellation"),
    ("payAtHotel", "Pay at Hotel"),
    ("bestRated", "Best Rated"),
    ("mountainView", "Mountain View"),
];

/// Design settings (singleton per hotel tenant).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignSettings {
    /// Durable image URL, or empty. Transient local previews are never
    /// persisted here; see the design form's normalization rule.
    #[serde(default)]
    pub hero_image: String,
    #[serde(default)]
    pub hero_heading: String,
    #[serde(default)]
    pub hero_subtext: String,
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub accent_color: String,
    /// Id of one of [`FONT_PAIRINGS`].
    #[serde(default)]
    pub font_pairing: String,
    /// Enabled filter keys, built-in and custom.
    #[serde(default)]
    pub booking_filters: Vec<String>,
    /// Generated key -> display label for owner-defined filters.
    #[serde(default)]
    pub custom_filters: HashMap<String, String>,
}

/// Partial update payload: only `Some` fields are sent and applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_subtext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_pairing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_filters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_filters: Option<HashMap<String, String>>,
}

impl DesignSettings {
    /// Apply a partial update in place.
    pub fn apply_update(&mut self, update: &DesignSettingsUpdate) {
        if let Some(v) = &update.hero_image {
            self.hero_image = v.clone();
        }
        if let Some(v) = &update.hero_heading {
            self.hero_heading = v.clone();
        }
        if let Some(v) = &update.hero_subtext {
            self.hero_subtext = v.clone();
        }
        if let Some(v) = &update.primary_color {
            self.primary_color = v.clone();
        }
        if let Some(v) = &update.accent_color {
            self.accent_color = v.clone();
        }
        if let Some(v) = &update.font_pairing {
            self.font_pairing = v.clone();
        }
        if let Some(v) = &update.booking_filters {
            self.booking_filters = v.clone();
        }
        if let Some(v) = &update.custom_filters {
            self.custom_filters = v.clone();
        }
    }

    pub fn is_built_in_filter(key: &str) -> bool {
        BUILT_IN_FILTERS.iter().any(|(k, _)| *k == key)
    }
}

/// Derive a camelCase filter key from a display label.
///
/// "Pool Access" -> "poolAccess".
pub fn filter_key_from_label(label: &str) -> String {
    let mut key = String::new();
    for (i, word) in label.split_whitespace().enumerate() {
        let word = word.to_lowercase();
        if i == 0 {
            key.push_str(&word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                key.extend(first.to_uppercase());
                key.push_str(chars.as_str());
            }
        }
    }
    key
}

/// A curated heading/body font combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPairing {
    pub id: &'static str,
    pub name: &'static str,
    pub fonts: &'static str,
}

pub const FONT_PAIRINGS: &[FontPairing] = &[
    FontPairing {
        id: "high-end-serif",
        name: "High-end Serif",
        fonts: "Playfair Display + Source Sans Pro",
    },
    FontPairing {
        id: "modern-minimalist",
        name: "Modern Minimalist",
        fonts: "Inter + Inter",
    },
    FontPairing {
        id: "grand-classic",
        name: "Grand Classic",
        fonts: "Lora + Source Sans Pro",
    },
];

pub fn font_pairing(id: &str) -> Option<&'static FontPairing> {
    FONT_PAIRINGS.iter().find(|p| p.id == id)
}

/// A named primary/accent color preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
}

pub const COLOR_PRESETS: &[ColorPreset] = &[
    ColorPreset { name: "Indigo", primary: "#4F46E5", accent: "#F5F5F4" },
    ColorPreset { name: "Emerald", primary: "#059669", accent: "#F0FDF4" },
    ColorPreset { name: "Amber", primary: "#D97706", accent: "#FFFBEB" },
    ColorPreset { name: "Rose", primary: "#E11D48", accent: "#FFF1F2" },
    ColorPreset { name: "Slate", primary: "#475569", accent: "#F8FAFC" },
];
