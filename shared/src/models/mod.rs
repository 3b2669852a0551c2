//! Data models
//!
//! Shared between the REST client and the console core. Wire field names
//! follow the backend contract (snake_case for settings payloads, camelCase
//! where the add-on endpoints use it).

pub mod addon;
pub mod design;
pub mod hotel;
pub mod property;
pub mod setup;

// Re-exports
pub use addon::*;
pub use design::*;
pub use hotel::*;
pub use property::*;
pub use setup::*;
