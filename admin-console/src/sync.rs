//! Optimistic settings synchronization.
//!
//! Every settings write follows the same shape: snapshot local state,
//! merge the delta locally so the UI reflects the change immediately,
//! send the delta, then either adopt the server's canonical document or
//! roll the snapshot back bit for bit.

use std::future::Future;
use std::time::{Duration, Instant};

use console_client::{ClientError, ClientResult};
use shared::error::SyncError;
use shared::models::{
    AddonSettings, AddonSettingsUpdate, DesignSettings, DesignSettingsUpdate, PropertySettings,
    PropertySettingsUpdate,
};

/// A settings document that supports partial local merges.
pub trait SettingsShape: Clone + PartialEq {
    type Delta;

    fn merge(&mut self, delta: &Self::Delta);
}

impl SettingsShape for PropertySettings {
    type Delta = PropertySettingsUpdate;

    fn merge(&mut self, delta: &Self::Delta) {
        self.apply_update(delta);
    }
}

impl SettingsShape for DesignSettings {
    type Delta = DesignSettingsUpdate;

    fn merge(&mut self, delta: &Self::Delta) {
        self.apply_update(delta);
    }
}

impl SettingsShape for AddonSettings {
    type Delta = AddonSettingsUpdate;

    fn merge(&mut self, delta: &Self::Delta) {
        self.apply_update(delta);
    }
}

/// Optimistic-update engine over one settings document.
///
/// Taking `&mut self` across the request means updates to one document
/// serialize by construction; there is no window where two in-flight
/// patches race to overwrite each other's rollback snapshot.
#[derive(Debug)]
pub struct OptimisticSync<T: SettingsShape> {
    state: T,
}

impl<T: SettingsShape> OptimisticSync<T> {
    pub fn new(state: T) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &T {
        &self.state
    }

    /// Replace the document wholesale, e.g. after an initial fetch.
    pub fn replace(&mut self, state: T) {
        self.state = state;
    }

    /// Apply `delta` optimistically, then reconcile with the server.
    ///
    /// On success the server's canonical document replaces local state
    /// entirely. On failure the pre-update snapshot is restored unchanged.
    pub async fn apply<F, Fut>(&mut self, delta: T::Delta, patch: F) -> Result<(), SyncError>
    where
        F: FnOnce(T::Delta) -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let snapshot = self.state.clone();
        self.state.merge(&delta);

        match patch(delta).await {
            Ok(canonical) => {
                self.state = canonical;
                Ok(())
            }
            Err(e) => {
                self.state = snapshot;
                Err(sync_error(e))
            }
        }
    }
}

fn sync_error(e: ClientError) -> SyncError {
    tracing::warn!(error = %e, "Settings update rejected, rolled back");
    SyncError::from(e)
}

// ============ Notifications ============

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Single-slot transient notification with lazy expiry.
///
/// A new notice replaces the previous one; a notice older than the TTL
/// reads as absent. No timers run in the background.
#[derive(Debug)]
pub struct Notifications {
    current: Option<(Notice, Instant)>,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(3))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    fn push(&mut self, kind: NoticeKind, message: String) {
        self.current = Some((Notice { kind, message }, Instant::now()));
    }

    /// The live notice, if any. Expired notices are dropped on read.
    pub fn current(&mut self) -> Option<&Notice> {
        if let Some((_, born)) = &self.current
            && born.elapsed() >= self.ttl
        {
            self.current = None;
        }
        self.current.as_ref().map(|(notice, _)| notice)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
