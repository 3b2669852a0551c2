//! Auth API DTOs shared between the REST client and the console core.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account role as understood by the console.
///
/// The wire carries the role as a free-form `type` string; only these two
/// values grant console access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRole {
    #[serde(rename = "hotel")]
    HotelAdmin,
    #[serde(rename = "superadmin")]
    SuperAdmin,
}

impl AccountRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountRole::HotelAdmin => "hotel",
            AccountRole::SuperAdmin => "superadmin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "hotel" => Some(AccountRole::HotelAdmin),
            "superadmin" => Some(AccountRole::SuperAdmin),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request
///
/// `terms_accepted` / `privacy_accepted` are required by the backend and
/// always sent as `true` by this console.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub terms_accepted: bool,
    pub privacy_accepted: bool,
}

impl RegisterRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            terms_accepted: true,
            privacy_accepted: true,
        }
    }
}

/// Response shape shared by login and register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Account role string; see [`AccountRole::parse`].
    #[serde(rename = "type")]
    pub account_type: String,
    pub status: String,
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds.
    pub expires_in: u64,
    #[serde(default)]
    pub message: String,
}

impl AuthResponse {
    pub fn role(&self) -> Option<AccountRole> {
        AccountRole::parse(&self.account_type)
    }
}

/// Forgot-password request (anti-enumeration: always reported as success)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
}

/// Reset-password request carrying the emailed token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Change-password request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Change-email request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEmailRequest {
    pub new_email: String,
    pub password: String,
}

/// Change-email response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEmailResponse {
    pub message: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing() {
        assert_eq!(AccountRole::parse("hotel"), Some(AccountRole::HotelAdmin));
        assert_eq!(AccountRole::parse("superadmin"), Some(AccountRole::SuperAdmin));
        assert_eq!(AccountRole::parse("guest"), None);
    }

    #[test]
    fn register_request_accepts_terms() {
        let req = RegisterRequest::new("Ana", "ana@example.com", "password123");
        assert!(req.terms_accepted);
        assert!(req.privacy_accepted);
    }

    #[test]
    fn auth_response_role_from_wire_type() {
        let json = r#"{
            "id": "u1", "email": "a@b.com", "name": "A",
            "type": "hotel", "status": "active",
            "access_token": "tok", "token_type": "bearer", "expires_in": 3600
        }"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.role(), Some(AccountRole::HotelAdmin));
    }
}
