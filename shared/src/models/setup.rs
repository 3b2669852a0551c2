//! Setup status, derived server-side and only ever polled by the console.

use serde::{Deserialize, Serialize};

/// Response of `GET /admin/settings/setup-status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetupStatus {
    pub setup_complete: bool,
    #[serde(default)]
    pub missing_fields: Vec<String>,
    /// External marketplace profile snapshot, used to prefill the wizard.
    #[serde(default)]
    pub prefill_data: Option<PrefillData>,
}

/// Marketplace profile fields offered for one-time wizard prefill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrefillData {
    #[serde(default)]
    pub property_name: Option<String>,
    #[serde(default)]
    pub reservation_email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub hero_image: Option<String>,
}
