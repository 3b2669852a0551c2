//! First-run setup wizard.
//!
//! Two steps: property basics, then branding. Completion is backend
//! authoritative: both saves can succeed and the wizard still refuses to
//! finish if the re-queried status says fields are missing. The local
//! completion flag is only ever a hint.

use console_client::{SettingsApi, UploadApi};
use shared::error::{SetupError, UploadError};
use shared::models::{
    COLOR_PRESETS, DesignSettingsUpdate, FONT_PAIRINGS, PrefillData, PropertySettingsUpdate,
};

use crate::app::Route;
use crate::session::SessionContext;
use crate::settings::ImageSource;
use crate::store::StateStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    Property,
    Design,
}

/// Wizard state, fields edited directly by the shell.
#[derive(Debug)]
pub struct SetupWizard {
    pub step: SetupStep,
    pub property_name: String,
    pub reservation_email: String,
    pub phone_number: String,
    pub address: String,
    pub primary_color: String,
    pub accent_color: String,
    pub font_pairing: String,
    pub hero: ImageSource,
    prefilled: bool,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupWizard {
    /// Fresh wizard with the first curated preset preselected.
    pub fn new() -> Self {
        Self {
            step: SetupStep::Property,
            property_name: String::new(),
            reservation_email: String::new(),
            phone_number: String::new(),
            address: String::new(),
            primary_color: COLOR_PRESETS[0].primary.to_string(),
            accent_color: COLOR_PRESETS[0].accent.to_string(),
            font_pairing: FONT_PAIRINGS[0].id.to_string(),
            hero: ImageSource::Empty,
            prefilled: false,
        }
    }

    /// Entering the wizard: verify the session and the live setup status.
    ///
    /// Returns the route to redirect to, or `None` to stay. A status the
    /// backend cannot answer counts as incomplete, so the wizard stays up.
    pub async fn enter<S: StateStore>(
        &mut self,
        ctx: &mut SessionContext<S>,
        api: &impl SettingsApi,
    ) -> Option<Route> {
        if !ctx.is_logged_in() {
            return Some(Route::Login);
        }

        match api.setup_status().await {
            Ok(status) if status.setup_complete => {
                ctx.set_setup_complete_hint(true);
                Some(Route::Dashboard)
            }
            Ok(status) => {
                if let Some(prefill) = &status.prefill_data {
                    self.apply_prefill(prefill);
                }
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Setup status unavailable, staying in wizard");
                None
            }
        }
    }

    /// Prefill from the marketplace profile, exactly once and only into
    /// fields the user has not already filled.
    fn apply_prefill(&mut self, prefill: &PrefillData) {
        if self.prefilled {
            return;
        }
        self.prefilled = true;

        fill_if_empty(&mut self.property_name, &prefill.property_name);
        fill_if_empty(&mut self.reservation_email, &prefill.reservation_email);
        fill_if_empty(&mut self.phone_number, &prefill.phone_number);
        fill_if_empty(&mut self.address, &prefill.address);
        if self.hero.is_empty()
            && let Some(url) = prefill.hero_image.as_deref().filter(|u| !u.is_empty())
        {
            self.hero = ImageSource::Url(url.to_string());
        }
    }

    fn property_ready(&self) -> bool {
        !self.property_name.trim().is_empty()
            && !self.reservation_email.trim().is_empty()
            && !self.phone_number.trim().is_empty()
            && !self.address.trim().is_empty()
    }

    fn design_ready(&self) -> bool {
        !self.primary_color.is_empty()
            && !self.accent_color.is_empty()
            && !self.font_pairing.is_empty()
            // A local preview counts here; persistence normalizes it.
            && !self.hero.is_empty()
    }

    /// Whether the current step's required fields are filled.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            SetupStep::Property => self.property_ready(),
            SetupStep::Design => self.design_ready(),
        }
    }

    /// Advance to the design step; refused while required fields are empty.
    pub fn next(&mut self) -> bool {
        if self.step == SetupStep::Property && self.can_proceed() {
            self.step = SetupStep::Design;
            true
        } else {
            false
        }
    }

    pub fn back(&mut self) {
        self.step = SetupStep::Property;
    }

    /// Upload the hero image, same preview/revert contract as the design
    /// studio.
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
                Err(e)
            }
        }
    }

    /// Finish setup: persist both steps, then let the backend confirm.
    ///
    /// Only a confirmed-complete status navigates to the dashboard and
    /// caches the hint. A rejected confirmation surfaces the backend's
    /// missing-field list; nothing is retried silently.
    pub async fn complete<S: StateStore>(
        &mut self,
        ctx: &mut SessionContext<S>,
        api: &impl SettingsApi,
    ) -> Result<Route, SetupError> {
        if !self.property_ready() || !self.design_ready() {
            return Err(SetupError::MissingFields);
        }

        let property = PropertySettingsUpdate {
            property_name: Some(self.property_name.trim().to_string()),
            reservation_email: Some(self.reservation_email.trim().to_string()),
            phone_number: Some(self.phone_number.trim().to_string()),
            address: Some(self.address.trim().to_string()),
            ..Default::default()
        };
        api.patch_property_settings(&property)
            .await
            .map_err(|e| SetupError::Save(e.to_string()))?;

        let design = DesignSettingsUpdate {
            hero_image: Some(self.hero.persistable()),
            primary_color: Some(self.primary_color.clone()),
            accent_color: Some(self.accent_color.clone()),
            font_pairing: Some(self.font_pairing.clone()),
            ..Default::default()
        };
        api.patch_design_settings(&design)
            .await
            .map_err(|e| SetupError::Save(e.to_string()))?;

        let status = api
            .setup_status()
            .await
            .map_err(|e| SetupError::Status(e.to_string()))?;
        if !status.setup_complete {
            return Err(SetupError::StillIncomplete {
                missing: status.missing_fields,
            });
        }

        ctx.set_setup_complete_hint(true);
        tracing::info!("Setup completed");
        Ok(Route::Dashboard)
    }
}

fn fill_if_empty(field: &mut String, value: &Option<String>) {
    if field.is_empty()
        && let Some(v) = value.as_deref().filter(|v| !v.is_empty())
    {
        *field = v.to_string();
    }
}
