//! Property settings

use serde::{Deserialize, Serialize};

/// Property settings (singleton per hotel tenant).
///
/// Invariant: `default_currency` never appears in `supported_currencies`.
/// Enforced on write by the settings form, which folds a default-currency
/// change and the supported-list removal into one delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySettings {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub property_name: String,
    #[serde(default)]
    pub reservation_email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub whatsapp_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "default_currency")]
    pub default_currency: String,
    #[serde(default)]
    pub supported_currencies: Vec<String>,
    #[serde(default = "default_languages")]
    pub supported_languages: Vec<String>,
    #[serde(default = "default_true")]
    pub email_notifications: bool,
    #[serde(default = "default_true")]
    pub new_booking_alerts: bool,
    #[serde(default = "default_true")]
    pub payment_alerts: bool,
    #[serde(default)]
    pub weekly_reports: bool,
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_true() -> bool {
    true
}

impl Default for PropertySettings {
    fn default() -> Self {
        Self {
            slug: String::new(),
            property_name: String::new(),
            reservation_email: String::new(),
            phone_number: String::new(),
            whatsapp_number: String::new(),
            address: String::new(),
            default_currency: default_currency(),
            supported_currencies: Vec::new(),
            supported_languages: default_languages(),
            email_notifications: true,
            new_booking_alerts: true,
            payment_alerts: true,
            weekly_reports: false,
        }
    }
}

/// Partial update payload: only `Some` fields are sent and applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertySettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_currencies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_booking_alerts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_alerts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_reports: Option<bool>,
}

impl PropertySettings {
    /// Apply a partial update in place.
    pub fn apply_update(&mut self, update: &PropertySettingsUpdate) {
        if let Some(v) = &update.property_name {
            self.property_name = v.clone();
        }
        if let Some(v) = &update.reservation_email {
            self.reservation_email = v.clone();
        }
        if let Some(v) = &update.phone_number {
            self.phone_number = v.clone();
        }
        if let Some(v) = &update.whatsapp_number {
            self.whatsapp_number = v.clone();
        }
        if let Some(v) = &update.address {
            self.address = v.clone();
        }
        if let Some(v) = &update.default_currency {
            self.default_currency = v.clone();
        }
        if let Some(v) = &update.supported_currencies {
            self.supported_currencies = v.clone();
        }
        if let Some(v) = &update.supported_languages {
            self.supported_languages = v.clone();
        }
        if let Some(v) = update.email_notifications {
            self.email_notifications = v;
        }
        if let Some(v) = update.new_booking_alerts {
            self.new_booking_alerts = v;
        }
        if let Some(v) = update.payment_alerts {
            self.payment_alerts = v;
        }
        if let Some(v) = update.weekly_reports {
            self.weekly_reports = v;
        }
    }
}
