//! Error taxonomy for the admin console
//!
//! All network failures are converted to one of these domain errors at the
//! operation boundary and surfaced as a dismissible message; nothing
//! propagates as an uncaught failure.

use thiserror::Error;

/// Authentication and account-management errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// HTTP 401 on login
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// HTTP 403 on login
    #[error("This account has been suspended")]
    AccountSuspended,

    /// HTTP 422, carrying one-or-many field messages
    #[error("{}", messages.join("; "))]
    Validation { messages: Vec<String> },

    /// HTTP 400 on registration
    #[error("An account with this email already exists")]
    EmailTaken,

    /// Login succeeded but the account role does not grant console access
    #[error("Access denied. Hotel admin account required (got '{0}')")]
    RoleMismatch(String),

    /// Anything else, including transport failures
    #[error("An unexpected error occurred: {0}")]
    Unknown(String),
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::Validation {
            messages: vec![message.into()],
        }
    }
}

/// Generic optimistic-update failure. Local state has already been rolled
/// back to its pre-update snapshot when this is returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SyncError {
    #[error("Failed to save changes: {0}")]
    Remote(String),
}

/// Image upload failure against the PMS service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UploadError {
    #[error("Image upload failed: {0}")]
    Failed(String),

    /// 2xx response without an image URL in the body
    #[error("No image URL returned")]
    MissingUrl,
}

/// Setup wizard completion errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SetupError {
    /// Local gate: a required wizard field is still empty
    #[error("Please fill in all required fields")]
    MissingFields,

    /// A persist call failed; the user can retry (recoverable)
    #[error("Failed to save setup: {0}")]
    Save(String),

    /// Both saves succeeded but the backend still reports missing fields.
    /// Server-side invariant violation; reported, never silently retried.
    #[error("Setup is still incomplete: missing {}", missing.join(", "))]
    StillIncomplete { missing: Vec<String> },

    /// The status re-query itself failed
    #[error("Failed to verify setup status: {0}")]
    Status(String),
}
