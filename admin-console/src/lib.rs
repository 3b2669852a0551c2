//! Headless core of the hotel booking admin console.
//!
//! Owns session lifecycle, tenant resolution, the first-run setup gate,
//! optimistic settings synchronization and the add-on catalog. The UI
//! shell drives this crate and renders its state; all network access goes
//! through the `console-client` API traits so everything here is testable
//! against in-memory fakes.

pub mod account;
pub mod addons;
pub mod app;
pub mod session;
pub mod settings;
pub mod setup;
pub mod store;
pub mod sync;
pub mod tenant;

pub use account::AccountSecurity;
pub use addons::{AddonDisplay, AddonError, AddonRegistry, Confirmation};
pub use app::{Route, resolve_entry};
pub use session::{Identity, SessionContext};
pub use settings::{DesignStudio, ImageSource, NotificationChannel, PropertyForm};
pub use setup::{SetupStep, SetupWizard};
pub use store::{FileStore, MemoryStore, StateStore};
pub use sync::{Notice, NoticeKind, Notifications, OptimisticSync, SettingsShape};
pub use tenant::TenantSwitch;
