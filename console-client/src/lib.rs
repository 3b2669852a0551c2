//! Console Client - REST client for the booking admin backend
//!
//! Typed access to the auth and admin endpoints, plus the external PMS
//! image-upload service. The `api` traits are the seam the console core
//! programs against; `RestClient` and `PmsClient` are the network-backed
//! implementations.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod rest;
pub mod upload;

pub use api::{AddonApi, AuthApi, HotelApi, SettingsApi, UploadApi};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use rest::RestClient;
pub use upload::PmsClient;
