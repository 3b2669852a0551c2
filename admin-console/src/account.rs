//! Account security: password and email changes.

use console_client::AuthApi;
use shared::auth::{ChangeEmailRequest, ChangePasswordRequest};
use shared::error::AuthError;

use crate::session::SessionContext;
use crate::store::{StateStore, keys};
use crate::sync::Notifications;

/// Account security form.
#[derive(Debug, Default)]
pub struct AccountSecurity {
    pub notices: Notifications,
}

impl AccountSecurity {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn change_password(
        &mut self,
        api: &impl AuthApi,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        if new_password.len() < 8 {
            let err = AuthError::validation("Password must be at least 8 characters");
            self.notices.error(err.to_string());
            return Err(err);
        }

        let request = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        match api.change_password(&request).await {
            Ok(()) => {
                self.notices.success("Password updated");
                Ok(())
            }
            Err(e) => {
                self.notices.error(e.to_string());
                Err(e)
            }
        }
    }

    /// Change the account email; the cached identity follows the server's
    /// confirmed value, never the submitted one.
    pub async fn change_email<S: StateStore>(
        &mut self,
        ctx: &mut SessionContext<S>,
        api: &impl AuthApi,
        new_email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let request = ChangeEmailRequest {
            new_email: new_email.trim().to_string(),
            password: password.to_string(),
        };
        match api.change_email(&request).await {
            Ok(resp) => {
                ctx.store_mut().set(keys::USER_EMAIL, &resp.email);
                self.notices.success(resp.message);
                Ok(())
            }
            Err(e) => {
                self.notices.error(e.to_string());
                Err(e)
            }
        }
    }
}

