//! API traits — the seam between the console core and the network.
//!
//! `RestClient` / `PmsClient` implement these over HTTP; tests substitute
//! in-memory fakes.

use async_trait::async_trait;

use crate::ClientResult;
use shared::auth::{
    AuthResponse, ChangeEmailRequest, ChangeEmailResponse, ChangePasswordRequest, LoginRequest,
    RegisterRequest, ResetPasswordRequest,
};
use shared::error::{AuthError, UploadError};
use shared::models::{
    AddonDraft, AddonItem, AddonSettings, AddonSettingsUpdate, DesignSettings,
    DesignSettingsUpdate, HotelSummary, PropertySettings, PropertySettingsUpdate, SetupStatus,
    SuperAdminHotel,
};

/// Account authentication and credentials management.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError>;
    async fn forgot_password(&self, email: &str) -> Result<(), AuthError>;
    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), AuthError>;
    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), AuthError>;
    async fn change_email(
        &self,
        request: &ChangeEmailRequest,
    ) -> Result<ChangeEmailResponse, AuthError>;
}

/// Hotel listings for tenant resolution.
#[async_trait]
pub trait HotelApi: Send + Sync {
    /// Hotels the current account may administer.
    async fn list_hotels(&self) -> ClientResult<Vec<HotelSummary>>;
    /// Every hotel on the platform (super-admin only).
    async fn list_all_hotels(&self) -> ClientResult<Vec<SuperAdminHotel>>;
}

/// Tenant-scoped settings documents.
#[async_trait]
pub trait SettingsApi: Send + Sync {
    async fn property_settings(&self) -> ClientResult<PropertySettings>;
    async fn patch_property_settings(
        &self,
        update: &PropertySettingsUpdate,
    ) -> ClientResult<PropertySettings>;

    async fn design_settings(&self) -> ClientResult<DesignSettings>;
    async fn patch_design_settings(
        &self,
        update: &DesignSettingsUpdate,
    ) -> ClientResult<DesignSettings>;

    async fn addon_settings(&self) -> ClientResult<AddonSettings>;
    async fn patch_addon_settings(
        &self,
        update: &AddonSettingsUpdate,
    ) -> ClientResult<AddonSettings>;

    /// Derived completeness status; recomputed by the backend on demand.
    async fn setup_status(&self) -> ClientResult<SetupStatus>;
}

/// Add-on catalog CRUD.
#[async_trait]
pub trait AddonApi: Send + Sync {
    async fn list_addons(&self) -> ClientResult<Vec<AddonItem>>;
    async fn create_addon(&self, draft: &AddonDraft) -> ClientResult<AddonItem>;
    async fn update_addon(&self, id: &str, draft: &AddonDraft) -> ClientResult<AddonItem>;
    async fn delete_addon(&self, id: &str) -> ClientResult<()>;
}

/// External PMS image upload.
#[async_trait]
pub trait UploadApi: Send + Sync {
    /// Upload image bytes; returns the durable URL on success.
    async fn upload_image(&self, filename: &str, bytes: Vec<u8>) -> Result<String, UploadError>;
}
