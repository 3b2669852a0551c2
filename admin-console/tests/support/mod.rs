//! In-memory backend fake implementing the console API traits.
//!
//! State lives behind mutexes so one fake can serve every trait at once.
//! Failure flags flip individual endpoints into rejection mode.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use console_client::{
    AddonApi, AuthApi, ClientError, ClientResult, HotelApi, SettingsApi, UploadApi,
};
use shared::auth::{
    AuthResponse, ChangeEmailRequest, ChangeEmailResponse, ChangePasswordRequest, LoginRequest,
    RegisterRequest, ResetPasswordRequest,
};
use shared::error::{AuthError, UploadError};
use shared::models::{
    AddonDraft, AddonItem, AddonSettings, AddonSettingsUpdate, DesignSettings,
    DesignSettingsUpdate, HotelSummary, PrefillData, PropertySettings, PropertySettingsUpdate,
    SetupStatus, SuperAdminHotel,
};

pub fn auth_response(role: &str) -> AuthResponse {
    AuthResponse {
        id: "u1".into(),
        email: "owner@example.com".into(),
        name: "Ana".into(),
        account_type: role.into(),
        status: "active".into(),
        access_token: "tok-123".into(),
        token_type: "bearer".into(),
        expires_in: 3600,
        message: String::new(),
    }
}

pub fn hotel(id: &str, name: &str) -> HotelSummary {
    HotelSummary {
        id: id.into(),
        name: name.into(),
        slug: name.to_lowercase().replace(' ', "-"),
        location: "Lombok".into(),
    }
}

#[derive(Default)]
pub struct FakeBackend {
    pub login_result: Mutex<Option<Result<AuthResponse, AuthError>>>,
    pub register_result: Mutex<Option<Result<AuthResponse, AuthError>>>,
    pub hotels: Mutex<Vec<HotelSummary>>,
    pub all_hotels: Mutex<Vec<SuperAdminHotel>>,
    pub property: Mutex<PropertySettings>,
    pub design: Mutex<DesignSettings>,
    pub addon_settings: Mutex<AddonSettings>,
    pub addons: Mutex<Vec<AddonItem>>,
    pub prefill: Mutex<Option<PrefillData>>,
    next_addon_id: Mutex<u32>,
    pub setup_status_calls: Mutex<u32>,
    // Failure switches
    pub fail_gets: Mutex<bool>,
    pub fail_patches: Mutex<bool>,
    pub fail_addon_calls: Mutex<bool>,
    pub fail_uploads: Mutex<bool>,
    pub force_incomplete: Mutex<bool>,
}

/// Route test logs through the capture writer; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

impl FakeBackend {
    pub fn new() -> Self {
        init_tracing();
        Self::default()
    }

    pub fn with_login(role: &str) -> Self {
        let backend = Self::new();
        *backend.login_result.lock().unwrap() = Some(Ok(auth_response(role)));
        backend
    }

    pub fn set_fail_gets(&self, fail: bool) {
        *self.fail_gets.lock().unwrap() = fail;
    }

    pub fn set_fail_patches(&self, fail: bool) {
        *self.fail_patches.lock().unwrap() = fail;
    }

    pub fn set_fail_addon_calls(&self, fail: bool) {
        *self.fail_addon_calls.lock().unwrap() = fail;
    }

    pub fn set_fail_uploads(&self, fail: bool) {
        *self.fail_uploads.lock().unwrap() = fail;
    }

    pub fn set_force_incomplete(&self, force: bool) {
        *self.force_incomplete.lock().unwrap() = force;
    }

    pub fn setup_status_calls(&self) -> u32 {
        *self.setup_status_calls.lock().unwrap()
    }

    fn reject(&self) -> ClientError {
        ClientError::InvalidResponse("backend rejected the request".into())
    }

    /// Setup completeness derived from stored settings, the way the real
    /// backend recomputes it on every poll.
    fn compute_setup_status(&self) -> SetupStatus {
        let property = self.property.lock().unwrap();
        let design = self.design.lock().unwrap();

        let mut missing = Vec::new();
        if property.property_name.is_empty() {
            missing.push("property_name".to_string());
        }
        if property.reservation_email.is_empty() {
            missing.push("reservation_email".to_string());
        }
        if design.primary_color.is_empty() {
            missing.push("primary_color".to_string());
        }
        if *self.force_incomplete.lock().unwrap() {
            missing.push("payment_profile".to_string());
        }

        SetupStatus {
            setup_complete: missing.is_empty(),
            missing_fields: missing,
            prefill_data: self.prefill.lock().unwrap().clone(),
        }
    }
}

#[async_trait]
impl AuthApi for FakeBackend {
    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        self.login_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Err(AuthError::InvalidCredentials))
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        self.register_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Err(AuthError::EmailTaken))
    }

    async fn forgot_password(&self, _email: &str) -> Result<(), AuthError> {
        Ok(())
    }

    async fn reset_password(&self, _request: &ResetPasswordRequest) -> Result<(), AuthError> {
        Ok(())
    }

    async fn change_password(&self, _request: &ChangePasswordRequest) -> Result<(), AuthError> {
        Ok(())
    }

    async fn change_email(
        &self,
        request: &ChangeEmailRequest,
    ) -> Result<ChangeEmailResponse, AuthError> {
        Ok(ChangeEmailResponse {
            message: "Email updated".into(),
            email: request.new_email.clone(),
        })
    }
}

#[async_trait]
impl HotelApi for FakeBackend {
    async fn list_hotels(&self) -> ClientResult<Vec<HotelSummary>> {
        Ok(self.hotels.lock().unwrap().clone())
    }

    async fn list_all_hotels(&self) -> ClientResult<Vec<SuperAdminHotel>> {
        Ok(self.all_hotels.lock().unwrap().clone())
    }
}

#[async_trait]
impl SettingsApi for FakeBackend {
    async fn property_settings(&self) -> ClientResult<PropertySettings> {
        if *self.fail_gets.lock().unwrap() {
            return Err(self.reject());
        }
        Ok(self.property.lock().unwrap().clone())
    }

    async fn patch_property_settings(
        &self,
        update: &PropertySettingsUpdate,
    ) -> ClientResult<PropertySettings> {
        if *self.fail_patches.lock().unwrap() {
            return Err(self.reject());
        }
        let mut property = self.property.lock().unwrap();
        property.apply_update(update);
        Ok(property.clone())
    }

    async fn design_settings(&self) -> ClientResult<DesignSettings> {
        if *self.fail_gets.lock().unwrap() {
            return Err(self.reject());
        }
        Ok(self.design.lock().unwrap().clone())
    }

    async fn patch_design_settings(
        &self,
        update: &DesignSettingsUpdate,
    ) -> ClientResult<DesignSettings> {
        if *self.fail_patches.lock().unwrap() {
            return Err(self.reject());
        }
        let mut design = self.design.lock().unwrap();
        design.apply_update(update);
        Ok(design.clone())
    }

    async fn addon_settings(&self) -> ClientResult<AddonSettings> {
        Ok(self.addon_settings.lock().unwrap().clone())
    }

    async fn patch_addon_settings(
        &self,
        update: &AddonSettingsUpdate,
    ) -> ClientResult<AddonSettings> {
        if *self.fail_patches.lock().unwrap() {
            return Err(self.reject());
        }
        let mut settings = self.addon_settings.lock().unwrap();
        settings.apply_update(update);
        Ok(settings.clone())
    }

    async fn setup_status(&self) -> ClientResult<SetupStatus> {
        *self.setup_status_calls.lock().unwrap() += 1;
        Ok(self.compute_setup_status())
    }
}

#[async_trait]
impl AddonApi for FakeBackend {
    async fn list_addons(&self) -> ClientResult<Vec<AddonItem>> {
        Ok(self.addons.lock().unwrap().clone())
    }

    async fn create_addon(&self, draft: &AddonDraft) -> ClientResult<AddonItem> {
        if *self.fail_addon_calls.lock().unwrap() {
            return Err(self.reject());
        }
        let mut next_id = self.next_addon_id.lock().unwrap();
        *next_id += 1;
        let item = AddonItem {
            id: format!("addon-{}", next_id),
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            currency: draft.currency.clone(),
            category: draft.category,
            image: draft.image.clone(),
            duration: draft.duration.clone(),
            per_person: draft.per_person,
        };
        self.addons.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update_addon(&self, id: &str, draft: &AddonDraft) -> ClientResult<AddonItem> {
        if *self.fail_addon_calls.lock().unwrap() {
            return Err(self.reject());
        }
        let mut addons = self.addons.lock().unwrap();
        let slot = addons
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ClientError::InvalidResponse("no such add-on".into()))?;
        slot.name = draft.name.clone();
        slot.description = draft.description.clone();
        slot.price = draft.price;
        slot.currency = draft.currency.clone();
        slot.category = draft.category;
        slot.image = draft.image.clone();
        slot.duration = draft.duration.clone();
        slot.per_person = draft.per_person;
        Ok(slot.clone())
    }

    async fn delete_addon(&self, id: &str) -> ClientResult<()> {
        if *self.fail_addon_calls.lock().unwrap() {
            return Err(self.reject());
        }
        self.addons.lock().unwrap().retain(|item| item.id != id);
        Ok(())
    }
}

#[async_trait]
impl UploadApi for FakeBackend {
    async fn upload_image(&self, filename: &str, _bytes: Vec<u8>) -> Result<String, UploadError> {
        if *self.fail_uploads.lock().unwrap() {
            return Err(UploadError::Failed("HTTP 500".into()));
        }
        Ok(format!("https://cdn.example.com/{filename}"))
    }
}
