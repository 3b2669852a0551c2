//! REST implementation of the API traits against the admin backend.

use async_trait::async_trait;

use crate::api::{AddonApi, AuthApi, HotelApi, SettingsApi};
use crate::error::{map_login_error, map_register_error, validation_messages};
use crate::http::HttpApi;
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::StatusCode;
use shared::auth::{
    AuthResponse, ChangeEmailRequest, ChangeEmailResponse, ChangePasswordRequest, LoginRequest,
    RegisterRequest, ResetPasswordRequest,
};
use shared::error::AuthError;
use shared::models::{
    AddonDraft, AddonItem, AddonSettings, AddonSettingsUpdate, DesignSettings,
    DesignSettingsUpdate, HotelSummary, PropertySettings, PropertySettingsUpdate, SetupStatus,
    SuperAdminHotel,
};

/// Client for the admin/auth backend.
#[derive(Debug)]
pub struct RestClient {
    http: HttpApi,
}

impl RestClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: HttpApi::from_config(config)?,
        })
    }

    /// Set or clear the bearer token used on authenticated calls.
    pub fn set_token(&self, token: Option<String>) {
        self.http.set_token(token);
    }

    pub fn token(&self) -> Option<String> {
        self.http.token()
    }
}

#[async_trait]
impl AuthApi for RestClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AuthError> {
        self.http
            .post::<AuthResponse, _>("/auth/login", request)
            .await
            .map_err(map_login_error)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AuthError> {
        self.http
            .post::<AuthResponse, _>("/auth/register", request)
            .await
            .map_err(map_register_error)
    }

    async fn forgot_password(&self, email: &str) -> Result<(), AuthError> {
        #[derive(serde::Serialize)]
        struct Body<'a> {
            email: &'a str,
        }

        // Anti-enumeration: the backend reports success for any email, so
        // only a transport failure is surfaced.
        match self.http.post_unit("/auth/forgot-password", &Body { email }).await {
            Ok(()) => Ok(()),
            Err(ClientError::Status { .. }) => Ok(()),
            Err(e) => Err(AuthError::Unknown(e.to_string())),
        }
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), AuthError> {
        self.http
            .post_unit("/auth/reset-password", request)
            .await
            .map_err(|e| match e.status() {
                Some(StatusCode::BAD_REQUEST) => {
                    AuthError::validation("This reset link is invalid or has expired")
                }
                Some(StatusCode::UNPROCESSABLE_ENTITY) => {
                    let body = match &e {
                        ClientError::Status { body, .. } => body.clone(),
                        _ => String::new(),
                    };
                    AuthError::Validation {
                        messages: validation_messages(&body),
                    }
                }
                _ => AuthError::Unknown(e.to_string()),
            })
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), AuthError> {
        self.http
            .post_unit("/auth/change-password", request)
            .await
            .map_err(|_| {
                AuthError::validation("Failed to update password. Check your current password.")
            })
    }

    async fn change_email(
        &self,
        request: &ChangeEmailRequest,
    ) -> Result<ChangeEmailResponse, AuthError> {
        self.http
            .post::<ChangeEmailResponse, _>("/auth/change-email", request)
            .await
            .map_err(|e| match e.status() {
                Some(StatusCode::UNPROCESSABLE_ENTITY) => {
                    let body = match &e {
                        ClientError::Status { body, .. } => body.clone(),
                        _ => String::new(),
                    };
                    AuthError::Validation {
                        messages: validation_messages(&body),
                    }
                }
                _ => AuthError::Unknown(e.to_string()),
            })
    }
}

#[async_trait]
impl HotelApi for RestClient {
    async fn list_hotels(&self) -> ClientResult<Vec<HotelSummary>> {
        self.http.get("/admin/hotels").await
    }

    async fn list_all_hotels(&self) -> ClientResult<Vec<SuperAdminHotel>> {
        self.http.get("/admin/superadmin/hotels").await
    }
}

#[async_trait]
impl SettingsApi for RestClient {
    async fn property_settings(&self) -> ClientResult<PropertySettings> {
        self.http.get("/admin/settings/property").await
    }

    async fn patch_property_settings(
        &self,
        update: &PropertySettingsUpdate,
    ) -> ClientResult<PropertySettings> {
        self.http.patch("/admin/settings/property", update).await
    }

    async fn design_settings(&self) -> ClientResult<DesignSettings> {
        self.http.get("/admin/settings/design").await
    }

    async fn patch_design_settings(
        &self,
        update: &DesignSettingsUpdate,
    ) -> ClientResult<DesignSettings> {
        self.http.patch("/admin/settings/design", update).await
    }

    async fn addon_settings(&self) -> ClientResult<AddonSettings> {
        self.http.get("/admin/settings/addons").await
    }

    async fn patch_addon_settings(
        &self,
        update: &AddonSettingsUpdate,
    ) -> ClientResult<AddonSettings> {
        self.http.patch("/admin/settings/addons", update).await
    }

    async fn setup_status(&self) -> ClientResult<SetupStatus> {
        self.http.get("/admin/settings/setup-status").await
    }
}

#[async_trait]
impl AddonApi for RestClient {
    async fn list_addons(&self) -> ClientResult<Vec<AddonItem>> {
        self.http.get("/admin/addons").await
    }

    async fn create_addon(&self, draft: &AddonDraft) -> ClientResult<AddonItem> {
        self.http.post("/admin/addons", draft).await
    }

    async fn update_addon(&self, id: &str, draft: &AddonDraft) -> ClientResult<AddonItem> {
        self.http
            .patch(&format!("/admin/addons/{}", id), draft)
            .await
    }

    async fn delete_addon(&self, id: &str) -> ClientResult<()> {
        self.http.delete(&format!("/admin/addons/{}", id)).await
    }
}
