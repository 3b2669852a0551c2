//! Session lifecycle: login, cached identity, token expiry, logout.
//!
//! The bearer token is stored alongside an absolute expiry timestamp.
//! Expiry is enforced lazily: there are no background timers, the first
//! read past the deadline tears the session down atomically. The cached
//! identity fields exist so the shell can render a name and gate routes
//! without a network round-trip; they are never treated as proof of
//! authorization.

use console_client::AuthApi;
use shared::auth::{AccountRole, AuthResponse, LoginRequest, RegisterRequest};
use shared::error::AuthError;
use shared::util::now_millis;
use validator::Validate;

use crate::store::{AUTH_KEYS, StateStore, keys};

/// Identity snapshot cached at login.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Option<AccountRole>,
    pub status: String,
}

/// The console's view of who is signed in, backed by a [`StateStore`].
#[derive(Debug)]
pub struct SessionContext<S: StateStore> {
    store: S,
}

impl<S: StateStore> SessionContext<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // ============ Token ============

    /// Persist the bearer token with an absolute expiry deadline.
    pub fn store_token(&mut self, token: &str, expires_in_secs: u64) {
        let expires_at = now_millis() + (expires_in_secs as i64) * 1000;
        self.store.set(keys::ACCESS_TOKEN, token);
        self.store
            .set(keys::TOKEN_EXPIRES_AT, &expires_at.to_string());
    }

    /// The current token, or `None` once expired. An expired token clears
    /// the whole session in the same call, so no later read can observe a
    /// half-torn-down state.
    pub fn token(&mut self) -> Option<String> {
        self.token_at(now_millis())
    }

    fn token_at(&mut self, now_ms: i64) -> Option<String> {
        let token = self.store.get(keys::ACCESS_TOKEN)?;
        let expires_at = self
            .store
            .get(keys::TOKEN_EXPIRES_AT)
            .and_then(|raw| raw.parse::<i64>().ok());
        match expires_at {
            Some(deadline) if now_ms < deadline => Some(token),
            _ => {
                tracing::info!("Session token expired, clearing session");
                self.clear_session();
                None
            }
        }
    }

    pub fn is_logged_in(&mut self) -> bool {
        self.token().is_some()
    }

    // ============ Identity ============

    fn cache_identity(&mut self, resp: &AuthResponse) {
        self.store.set(keys::USER_ID, &resp.id);
        self.store.set(keys::USER_EMAIL, &resp.email);
        self.store.set(keys::USER_NAME, &resp.name);
        self.store.set(keys::USER_TYPE, &resp.account_type);
        self.store.set(keys::USER_STATUS, &resp.status);
        self.store.set(keys::IS_LOGGED_IN, "true");
    }

    pub fn identity(&self) -> Option<Identity> {
        let id = self.store.get(keys::USER_ID)?;
        Some(Identity {
            id,
            email: self.store.get(keys::USER_EMAIL).unwrap_or_default(),
            name: self.store.get(keys::USER_NAME).unwrap_or_default(),
            role: self
                .store
                .get(keys::USER_TYPE)
                .as_deref()
                .and_then(AccountRole::parse),
            status: self.store.get(keys::USER_STATUS).unwrap_or_default(),
        })
    }

    pub fn role(&self) -> Option<AccountRole> {
        self.store
            .get(keys::USER_TYPE)
            .as_deref()
            .and_then(AccountRole::parse)
    }

    // ============ Tenant / setup caches ============

    pub fn selected_hotel_id(&self) -> Option<String> {
        self.store.get(keys::SELECTED_HOTEL_ID)
    }

    pub fn set_selected_hotel_id(&mut self, id: &str) {
        self.store.set(keys::SELECTED_HOTEL_ID, id);
    }

    /// Fast-path hint only. Routing decisions re-verify against the
    /// backend; this just suppresses a redirect flicker on launch.
    pub fn setup_complete_hint(&self) -> bool {
        self.store.get(keys::SETUP_COMPLETE).as_deref() == Some("true")
    }

    pub fn set_setup_complete_hint(&mut self, complete: bool) {
        self.store
            .set(keys::SETUP_COMPLETE, if complete { "true" } else { "false" });
    }

    // ============ Auth operations ============

    /// Log in and cache the session.
    ///
    /// The role is checked before anything touches the store: a token for
    /// an account this console cannot serve is never persisted, not even
    /// transiently.
    pub async fn login(
        &mut self,
        api: &impl AuthApi,
        email: &str,
        password: &str,
    ) -> Result<AccountRole, AuthError> {
        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        validate_request(&request)?;

        let resp = api.login(&request).await?;
        let role = resp
            .role()
            .ok_or_else(|| AuthError::RoleMismatch(resp.account_type.clone()))?;

        self.store_token(&resp.access_token, resp.expires_in);
        self.cache_identity(&resp);
        tracing::info!(email = %resp.email, role = %role, "Logged in");
        Ok(role)
    }

    /// Register a new hotel account and cache the session, same role gate
    /// as [`Self::login`].
    pub async fn register(
        &mut self,
        api: &impl AuthApi,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AccountRole, AuthError> {
        let request = RegisterRequest::new(name.trim(), email.trim(), password);
        validate_request(&request)?;

        let resp = api.register(&request).await?;
        let role = resp
            .role()
            .ok_or_else(|| AuthError::RoleMismatch(resp.account_type.clone()))?;

        self.store_token(&resp.access_token, resp.expires_in);
        self.cache_identity(&resp);
        tracing::info!(email = %resp.email, "Account registered");
        Ok(role)
    }

    /// Clear token and identity in one batch. The tenant selection and
    /// setup hint survive; they belong to logout, not expiry.
    pub fn clear_session(&mut self) {
        self.store.remove_many(AUTH_KEYS);
    }

    /// Full logout: session plus everything tenant-scoped, so the next
    /// account on this machine starts clean.
    pub fn logout(&mut self) {
        self.clear_session();
        self.store
            .remove_many(&[keys::SETUP_COMPLETE, keys::SELECTED_HOTEL_ID]);
        tracing::info!("Logged out");
    }
}

/// Collect `validator` messages into the auth taxonomy.
fn validate_request(request: &impl Validate) -> Result<(), AuthError> {
    request.validate().map_err(|errors| {
        let messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|field| field.iter())
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string())
            })
            .collect();
        AuthError::Validation { messages }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn session() -> SessionContext<MemoryStore> {
        SessionContext::new(MemoryStore::new())
    }

    #[test]
    fn token_valid_before_deadline() {
        let mut ctx = session();
        ctx.store_token("tok", 3600);
        assert_eq!(ctx.token().as_deref(), Some("tok"));
        assert!(ctx.is_logged_in());
    }

    #[test]
    fn expired_token_clears_whole_session() {
        let mut ctx = session();
        ctx.store.set(keys::ACCESS_TOKEN, "tok");
        ctx.store.set(keys::TOKEN_EXPIRES_AT, "1000");
        ctx.store.set(keys::USER_ID, "u1");
        ctx.store.set(keys::USER_TYPE, "hotel");

        assert_eq!(ctx.token_at(1000), None);
        assert_eq!(ctx.store.get(keys::ACCESS_TOKEN), None);
        assert_eq!(ctx.store.get(keys::USER_ID), None);
        assert_eq!(ctx.identity(), None);
    }

    #[test]
    fn garbage_expiry_treated_as_expired() {
        let mut ctx = session();
        ctx.store.set(keys::ACCESS_TOKEN, "tok");
        ctx.store.set(keys::TOKEN_EXPIRES_AT, "soon");
        assert_eq!(ctx.token(), None);
    }

    #[test]
    fn expiry_keeps_tenant_selection() {
        let mut ctx = session();
        ctx.store.set(keys::ACCESS_TOKEN, "tok");
        ctx.store.set(keys::TOKEN_EXPIRES_AT, "0");
        ctx.set_selected_hotel_id("hotel-1");

        assert_eq!(ctx.token(), None);
        assert_eq!(ctx.selected_hotel_id().as_deref(), Some("hotel-1"));
    }

    #[test]
    fn logout_clears_tenant_and_setup_state() {
        let mut ctx = session();
        ctx.store_token("tok", 3600);
        ctx.set_selected_hotel_id("hotel-1");
        ctx.set_setup_complete_hint(true);

        ctx.logout();
        assert!(!ctx.is_logged_in());
        assert_eq!(ctx.selected_hotel_id(), None);
        assert!(!ctx.setup_complete_hint());
    }

    #[test]
    fn role_parses_cached_type() {
        let mut ctx = session();
        ctx.store.set(keys::USER_TYPE, "superadmin");
        assert_eq!(ctx.role(), Some(AccountRole::SuperAdmin));
        ctx.store.set(keys::USER_TYPE, "guest");
        assert_eq!(ctx.role(), None);
    }
}
