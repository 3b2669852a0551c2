//! Client error types and status-code mapping

use reqwest::StatusCode;
use shared::error::{AuthError, SyncError};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response with the raw body preserved for mapping
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Status code of the response, if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }
}

impl From<ClientError> for SyncError {
    fn from(err: ClientError) -> Self {
        SyncError::Remote(err.to_string())
    }
}

/// Extract one-or-many field messages from a 422 body.
///
/// The backend returns either `{"detail": "message"}` or
/// `{"detail": [{"loc": [...], "msg": "message"}, ...]}`.
pub(crate) fn validation_messages(body: &str) -> Vec<String> {
    let fallback = || vec!["Validation error".to_string()];
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return fallback(),
    };
    match value.get("detail") {
        Some(serde_json::Value::String(s)) => vec![s.clone()],
        Some(serde_json::Value::Array(entries)) => {
            let messages: Vec<String> = entries
                .iter()
                .filter_map(|e| {
                    e.get("msg")
                        .and_then(|m| m.as_str())
                        .or_else(|| e.as_str())
                        .map(str::to_string)
                })
                .collect();
            if messages.is_empty() { fallback() } else { messages }
        }
        _ => fallback(),
    }
}

/// Map a login failure to the auth taxonomy.
pub(crate) fn map_login_error(err: ClientError) -> AuthError {
    match &err {
        ClientError::Status { status, body } => match *status {
            StatusCode::UNAUTHORIZED => AuthError::InvalidCredentials,
            StatusCode::FORBIDDEN => AuthError::AccountSuspended,
            StatusCode::UNPROCESSABLE_ENTITY => AuthError::Validation {
                messages: validation_messages(body),
            },
            _ => AuthError::Unknown(err.to_string()),
        },
        _ => AuthError::Unknown(err.to_string()),
    }
}

/// Map a registration failure to the auth taxonomy.
pub(crate) fn map_register_error(err: ClientError) -> AuthError {
    match &err {
        ClientError::Status { status, body } => match *status {
            StatusCode::BAD_REQUEST => AuthError::EmailTaken,
            StatusCode::UNPROCESSABLE_ENTITY => AuthError::Validation {
                messages: validation_messages(body),
            },
            _ => AuthError::Unknown(err.to_string()),
        },
        _ => AuthError::Unknown(err.to_string()),
    }
}
