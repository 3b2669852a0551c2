//! Top-level routing.
//!
//! The entry resolver is the one place that decides where a launch lands.
//! Cached flags only smooth the transition; every decision that matters is
//! re-verified against the backend on the way in.

use console_client::SettingsApi;
use shared::auth::AccountRole;

use crate::session::SessionContext;
use crate::store::StateStore;

/// Console destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    SetupWizard,
    ManageHotels,
    DesignStudio,
}

/// Decide where a (re)launch lands.
///
/// Super admins go straight to the tenant-management list and never pass
/// through the setup gate. Hotel admins are gated on the backend's setup
/// status; an unverifiable status counts as incomplete.
pub async fn resolve_entry<S: StateStore>(
    ctx: &mut SessionContext<S>,
    api: &impl SettingsApi,
) -> Route {
    if !ctx.is_logged_in() {
        return Route::Login;
    }

    match ctx.role() {
        Some(AccountRole::SuperAdmin) => Route::ManageHotels,
        Some(AccountRole::HotelAdmin) => match api.setup_status().await {
            Ok(status) => {
                ctx.set_setup_complete_hint(status.setup_complete);
                if status.setup_complete {
                    Route::Dashboard
                } else {
                    Route::SetupWizard
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Setup status unavailable, routing to wizard");
                Route::SetupWizard
            }
        },
        // A token without a recognizable cached role grants nothing.
        None => Route::Login,
    }
}
