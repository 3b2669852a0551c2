//! Shared types for the booking admin console
//!
//! Domain models, auth DTOs, and error types used by both the REST client
//! and the console core.

pub mod auth;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
