//! Property and design settings forms.
//!
//! Each form keeps a draft the user edits freely and a canonical document
//! managed by [`OptimisticSync`]. Saving builds one delta from the draft;
//! invariants that span fields (default currency, custom filter removal)
//! are folded into a single local transition so no observer ever sees the
//! halfway state.

use console_client::{SettingsApi, UploadApi};
use shared::error::{SyncError, UploadError};
use shared::models::{
    ColorPreset, DesignSettings, DesignSettingsUpdate, HERO_SUBTEXT_MAX, PropertySettings,
    PropertySettingsUpdate, filter_key_from_label, font_pairing,
};

use crate::sync::{Notifications, OptimisticSync};

// ============ Property settings ============

/// Notification toggles on the property form, each persisted optimistically
/// on flip rather than via the save button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChannel {
    Email,
    NewBooking,
    Payment,
    WeeklyReports,
}

/// Property info form.
#[derive(Debug)]
pub struct PropertyForm {
    draft: PropertySettings,
    sync: OptimisticSync<PropertySettings>,
    pub notices: Notifications,
}

impl PropertyForm {
    pub fn new(initial: PropertySettings) -> Self {
        Self {
            draft: initial.clone(),
            sync: OptimisticSync::new(initial),
            notices: Notifications::new(),
        }
    }

    /// Fetch current settings; a failed load opens the form on defaults
    /// with an error notice rather than blocking the page.
    pub async fn load(api: &impl SettingsApi) -> Self {
        match api.property_settings().await {
            Ok(settings) => Self::new(settings),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load property settings");
                let mut form = Self::new(PropertySettings::default());
                form.notices.error("Failed to load settings");
                form
            }
        }
    }

    pub fn draft(&self) -> &PropertySettings {
        &self.draft
    }

    /// Last server-confirmed document.
    pub fn settings(&self) -> &PropertySettings {
        self.sync.state()
    }

    /// Free-form draft edits (name, contact fields, address).
    pub fn draft_mut(&mut self) -> &mut PropertySettings {
        &mut self.draft
    }

    /// Change the default currency; the new default is dropped from the
    /// supported list in the same transition so it never appears in both.
    pub fn set_default_currency(&mut self, code: &str) {
        if self.draft.default_currency == code {
            return;
        }
        self.draft.default_currency = code.to_string();
        self.draft.supported_currencies.retain(|c| c != code);
    }

    pub fn add_supported_currency(&mut self, code: &str) {
        if code == self.draft.default_currency
            || self.draft.supported_currencies.iter().any(|c| c == code)
        {
            return;
        }
        self.draft.supported_currencies.push(code.to_string());
    }

    pub fn remove_supported_currency(&mut self, code: &str) {
        self.draft.supported_currencies.retain(|c| c != code);
    }

    pub fn add_language(&mut self, code: &str) {
        if self.draft.supported_languages.iter().any(|c| c == code) {
            return;
        }
        self.draft.supported_languages.push(code.to_string());
    }

    /// Removing the final language is a no-op; the set stays non-empty.
    pub fn remove_language(&mut self, code: &str) {
        if self.draft.supported_languages.len() <= 1 {
            return;
        }
        self.draft.supported_languages.retain(|c| c != code);
    }

    /// Flip a notification toggle and persist it immediately.
    pub async fn set_notification(
        &mut self,
        api: &impl SettingsApi,
        channel: NotificationChannel,
        enabled: bool,
    ) -> Result<(), SyncError> {
        let mut delta = PropertySettingsUpdate::default();
        match channel {
            NotificationChannel::Email => {
                self.draft.email_notifications = enabled;
                delta.email_notifications = Some(enabled);
            }
            NotificationChannel::NewBooking => {
                self.draft.new_booking_alerts = enabled;
                delta.new_booking_alerts = Some(enabled);
            }
            NotificationChannel::Payment => {
                self.draft.payment_alerts = enabled;
                delta.payment_alerts = Some(enabled);
            }
            NotificationChannel::WeeklyReports => {
                self.draft.weekly_reports = enabled;
                delta.weekly_reports = Some(enabled);
            }
        }

        let result = self
            .sync
            .apply(delta, |d| async move { api.patch_property_settings(&d).await })
            .await;
        if let Err(e) = &result {
            match channel {
                NotificationChannel::Email => self.draft.email_notifications = !enabled,
                NotificationChannel::NewBooking => self.draft.new_booking_alerts = !enabled,
                NotificationChannel::Payment => self.draft.payment_alerts = !enabled,
                NotificationChannel::WeeklyReports => self.draft.weekly_reports = !enabled,
            }
            self.notices.error(e.to_string());
        }
        result
    }

    /// Persist the draft as one delta.
    pub async fn save(&mut self, api: &impl SettingsApi) -> Result<(), SyncError> {
        let delta = PropertySettingsUpdate {
            property_name: Some(self.draft.property_name.clone()),
            reservation_email: Some(self.draft.reservation_email.clone()),
            phone_number: Some(self.draft.phone_number.clone()),
            whatsapp_number: Some(self.draft.whatsapp_number.clone()),
            address: Some(self.draft.address.clone()),
            default_currency: Some(self.draft.default_currency.clone()),
            supported_currencies: Some(self.draft.supported_currencies.clone()),
            supported_languages: Some(self.draft.supported_languages.clone()),
            ..Default::default()
        };

        let result = self
            .sync
            .apply(delta, |d| async move { api.patch_property_settings(&d).await })
            .await;
        match &result {
            Ok(()) => {
                self.draft = self.sync.state().clone();
                self.notices.success("Settings saved successfully");
            }
            Err(e) => self.notices.error(e.to_string()),
        }
        result
    }
}

// ============ Hero image ============

/// Where the hero image currently comes from.
///
/// A `Preview` is a transient local handle shown while an upload is in
/// flight or pending; it is never written to the backend. Only `Url`
/// values survive [`ImageSource::persistable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Empty,
    Preview(String),
    Url(String),
}

impl ImageSource {
    pub fn from_stored(stored: &str) -> Self {
        if stored.is_empty() {
            ImageSource::Empty
        } else {
            ImageSource::Url(stored.to_string())
        }
    }

    /// The value safe to persist: durable URLs pass through, everything
    /// else normalizes to empty.
    pub fn persistable(&self) -> String {
        match self {
            ImageSource::Url(url) => url.clone(),
            _ => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ImageSource::Empty)
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, ImageSource::Preview(_))
    }
}

// ============ Design studio ============

/// Branding and booking-filter form.
#[derive(Debug)]
pub struct DesignStudio {
    draft: DesignSettings,
    hero: ImageSource,
    sync: OptimisticSync<DesignSettings>,
    pub notices: Notifications,
}

impl DesignStudio {
    pub fn new(initial: DesignSettings) -> Self {
        Self {
            draft: initial.clone(),
            hero: ImageSource::from_stored(&initial.hero_image),
            sync: OptimisticSync::new(initial),
            notices: Notifications::new(),
        }
    }

    pub async fn load(api: &impl SettingsApi) -> Self {
        match api.design_settings().await {
            Ok(settings) => Self::new(settings),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load design settings");
                let mut studio = Self::new(DesignSettings::default());
                studio.notices.error("Failed to load settings");
                studio
            }
        }
    }

    pub fn draft(&self) -> &DesignSettings {
        &self.draft
    }

    pub fn settings(&self) -> &DesignSettings {
        self.sync.state()
    }

    pub fn hero(&self) -> &ImageSource {
        &self.hero
    }

    pub fn set_heading(&mut self, heading: &str) {
        self.draft.hero_heading = heading.to_string();
    }

    /// Subtext is bounded; input beyond the limit is truncated, not
    /// rejected.
    pub fn set_subtext(&mut self, subtext: &str) {
        self.draft.hero_subtext = subtext.chars().take(HERO_SUBTEXT_MAX).collect();
    }

    pub fn set_colors(&mut self, primary: &str, accent: &str) {
        self.draft.primary_color = primary.to_string();
        self.draft.accent_color = accent.to_string();
    }

    pub fn apply_preset(&mut self, preset: &ColorPreset) {
        self.set_colors(preset.primary, preset.accent);
    }

    /// Select a curated font pairing; unknown ids are ignored.
    pub fn set_font_pairing(&mut self, id: &str) {
        if font_pairing(id).is_some() {
            self.draft.font_pairing = id.to_string();
        }
    }

    /// Toggle a filter's enabled state. The key must be a built-in or an
    /// existing custom filter.
    pub fn toggle_filter(&mut self, key: &str) {
        if !DesignSettings::is_built_in_filter(key) && !self.draft.custom_filters.contains_key(key)
        {
            return;
        }
        if let Some(pos) = self.draft.booking_filters.iter().position(|k| k == key) {
            self.draft.booking_filters.remove(pos);
        } else {
            self.draft.booking_filters.push(key.to_string());
        }
    }

    /// Add an owner-defined filter, enabled by default. Returns the
    /// generated key, or `None` if the label collides with an existing
    /// built-in or custom filter.
    pub fn add_custom_filter(&mut self, label: &str) -> Option<String> {
        let label = label.trim();
        let key = filter_key_from_label(label);
        if key.is_empty() {
            return None;
        }
        if DesignSettings::is_built_in_filter(&key) || self.draft.custom_filters.contains_key(&key)
        {
            self.notices.error("A filter with this name already exists");
            return None;
        }
        self.draft
            .custom_filters
            .insert(key.clone(), label.to_string());
        self.draft.booking_filters.push(key.clone());
        Some(key)
    }

    /// Delete a custom filter: the key leaves both the label map and the
    /// enabled list in the same transition.
    pub fn remove_custom_filter(&mut self, key: &str) {
        if self.draft.custom_filters.remove(key).is_some() {
            self.draft.booking_filters.retain(|k| k != key);
        }
    }

    /// Upload a new hero image, showing a local preview while the request
    /// is in flight. On failure the previous image comes back untouched.
    pub async fn upload_hero(
        &mut self,
        uploader: &impl UploadApi,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), UploadError> {
        let previous = std::mem::replace(
            &mut self.hero,
            ImageSource::Preview(format!("preview:{filename}")),
        );

        match uploader.upload_image(filename, bytes).await {
            Ok(url) => {
                self.hero = ImageSource::Url(url);
                Ok(())
            }
            Err(e) => {
                self.hero = previous;
                self.notices.error("Image upload failed. Please try again.");
                Err(e)
            }
        }
    }

    pub fn remove_hero(&mut self) {
        self.hero = ImageSource::Empty;
    }

    /// Persist the draft as one delta. The hero image is normalized: only
    /// a durable URL is sent, a pending preview persists as empty.
    pub async fn save(&mut self, api: &impl SettingsApi) -> Result<(), SyncError> {
        let delta = DesignSettingsUpdate {
            hero_image: Some(self.hero.persistable()),
            hero_heading: Some(self.draft.hero_heading.clone()),
            hero_subtext: Some(self.draft.hero_subtext.clone()),
            primary_color: Some(self.draft.primary_color.clone()),
            accent_color: Some(self.draft.accent_color.clone()),
            font_pairing: Some(self.draft.font_pairing.clone()),
            booking_filters: Some(self.draft.booking_filters.clone()),
            custom_filters: Some(self.draft.custom_filters.clone()),
        };

        let result = self
            .sync
            .apply(delta, |d| async move { api.patch_design_settings(&d).await })
            .await;
        match &result {
            Ok(()) => {
                self.draft = self.sync.state().clone();
                self.hero = ImageSource::from_stored(&self.draft.hero_image);
                self.notices.success("Design saved successfully");
            }
            Err(e) => self.notices.error(e.to_string()),
        }
        result
    }
}
