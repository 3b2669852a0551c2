//! Add-on catalog management.
//!
//! Unlike the settings forms, creation is not optimistic: an add-on has no
//! identity until the server assigns one, so nothing is shown until the
//! create call returns. Deletion is guarded by an explicit confirmation
//! and a per-id in-flight marker.

use std::collections::HashSet;

use console_client::{AddonApi, SettingsApi};
use shared::error::SyncError;
use shared::models::{AddonCategory, AddonDraft, AddonItem, AddonSettings, AddonSettingsUpdate};
use thiserror::Error;

use crate::sync::{Notifications, OptimisticSync};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddonError {
    /// Local gate; no request is issued without a name.
    #[error("Add-on name is required")]
    NameRequired,

    #[error("{0}")]
    Remote(String),
}

/// Whether the user confirmed a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// The tenant's add-on catalog.
#[derive(Debug)]
pub struct AddonRegistry {
    items: Vec<AddonItem>,
    deleting: HashSet<String>,
    pub notices: Notifications,
}

impl AddonRegistry {
    pub fn new(items: Vec<AddonItem>) -> Self {
        Self {
            items,
            deleting: HashSet::new(),
            notices: Notifications::new(),
        }
    }

    /// Fetch the catalog; a failed load opens on an empty list so the rest
    /// of the page still works.
    pub async fn load(api: &impl AddonApi) -> Self {
        match api.list_addons().await {
            Ok(items) => Self::new(items),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load add-ons");
                let mut registry = Self::new(Vec::new());
                registry.notices.error("Failed to load add-ons");
                registry
            }
        }
    }

    pub fn items(&self) -> &[AddonItem] {
        &self.items
    }

    /// Whether a delete request for `id` is currently in flight.
    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    /// Items grouped by category, in the fixed category order. Empty
    /// categories are skipped.
    pub fn grouped(&self) -> Vec<(AddonCategory, Vec<&AddonItem>)> {
        AddonCategory::ALL
            .iter()
            .filter_map(|category| {
                let items: Vec<&AddonItem> = self
                    .items
                    .iter()
                    .filter(|item| item.category == *category)
                    .collect();
                if items.is_empty() {
                    None
                } else {
                    Some((*category, items))
                }
            })
            .collect()
    }

    /// Create an add-on. The item appears locally only after the server
    /// returns it with an id.
    pub async fn create(
        &mut self,
        api: &impl AddonApi,
        draft: AddonDraft,
    ) -> Result<String, AddonError> {
        if draft.name.trim().is_empty() {
            self.notices.error("Add-on name is required");
            return Err(AddonError::NameRequired);
        }

        match api.create_addon(&draft.normalized()).await {
            Ok(item) => {
                let id = item.id.clone();
                tracing::info!(id = %id, name = %item.name, "Add-on created");
                self.items.push(item);
                self.notices.success("Add-on created");
                Ok(id)
            }
            Err(e) => {
                self.notices.error("Failed to create add-on");
                Err(AddonError::Remote(e.to_string()))
            }
        }
    }

    /// Update an add-on in place; the item keeps its position in the list.
    /// Local state changes only on success.
    pub async fn update(
        &mut self,
        api: &impl AddonApi,
        id: &str,
        draft: AddonDraft,
    ) -> Result<(), AddonError> {
        if draft.name.trim().is_empty() {
            self.notices.error("Add-on name is required");
            return Err(AddonError::NameRequired);
        }

        match api.update_addon(id, &draft.normalized()).await {
            Ok(updated) => {
                if let Some(slot) = self.items.iter_mut().find(|item| item.id == id) {
                    *slot = updated;
                }
                self.notices.success("Add-on updated");
                Ok(())
            }
            Err(e) => {
                self.notices.error("Failed to update add-on");
                Err(AddonError::Remote(e.to_string()))
            }
        }
    }

    /// Delete an add-on. A cancelled confirmation and a delete already in
    /// flight are both silent no-ops.
    pub async fn delete(
        &mut self,
        api: &impl AddonApi,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<(), AddonError> {
        if confirmation == Confirmation::Cancelled || self.deleting.contains(id) {
            return Ok(());
        }

        self.deleting.insert(id.to_string());
        let result = api.delete_addon(id).await;
        self.deleting.remove(id);

        match result {
            Ok(()) => {
                self.items.retain(|item| item.id != id);
                tracing::info!(id = %id, "Add-on deleted");
                self.notices.success("Add-on deleted");
                Ok(())
            }
            Err(e) => {
                self.notices.error("Failed to delete add-on");
                Err(AddonError::Remote(e.to_string()))
            }
        }
    }
}

/// Booking-flow display toggles, persisted optimistically on flip.
#[derive(Debug)]
pub struct AddonDisplay {
    sync: OptimisticSync<AddonSettings>,
    pub notices: Notifications,
}

impl AddonDisplay {
    pub fn new(initial: AddonSettings) -> Self {
        Self {
            sync: OptimisticSync::new(initial),
            notices: Notifications::new(),
        }
    }

    pub async fn load(api: &impl SettingsApi) -> Self {
        match api.addon_settings().await {
            Ok(settings) => Self::new(settings),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load add-on settings");
                Self::new(AddonSettings::default())
            }
        }
    }

    pub fn settings(&self) -> &AddonSettings {
        self.sync.state()
    }

    pub async fn toggle_show_addons_step(
        &mut self,
        api: &impl SettingsApi,
    ) -> Result<(), SyncError> {
        let delta = AddonSettingsUpdate {
            show_addons_step: Some(!self.sync.state().show_addons_step),
            ..Default::default()
        };
        self.apply(api, delta).await
    }

    pub async fn toggle_group_by_category(
        &mut self,
        api: &impl SettingsApi,
    ) -> Result<(), SyncError> {
        let delta = AddonSettingsUpdate {
            group_addons_by_category: Some(!self.sync.state().group_addons_by_category),
            ..Default::default()
        };
        self.apply(api, delta).await
    }

    async fn apply(
        &mut self,
        api: &impl SettingsApi,
        delta: AddonSettingsUpdate,
    ) -> Result<(), SyncError> {
        let result = self
            .sync
            .apply(delta, |d| async move { api.patch_addon_settings(&d).await })
            .await;
        if let Err(e) = &result {
            self.notices.error(e.to_string());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: AddonCategory) -> AddonItem {
        AddonItem {
            id: id.into(),
            name: format!("addon {id}"),
            description: String::new(),
            price: 10.0,
            currency: "EUR".into(),
            category,
            image: String::new(),
            duration: None,
            per_person: false,
        }
    }

    #[test]
    fn grouping_follows_category_order_and_skips_empty() {
        let registry = AddonRegistry::new(vec![
            item("a", AddonCategory::Dining),
            item("b", AddonCategory::Transport),
            item("c", AddonCategory::Dining),
        ]);

        let groups = registry.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, AddonCategory::Transport);
        assert_eq!(groups[1].0, AddonCategory::Dining);
        assert_eq!(groups[1].1.len(), 2);
    }

    #[test]
    fn deleting_marker_defaults_off() {
        let registry = AddonRegistry::new(vec![item("a", AddonCategory::Wellness)]);
        assert!(!registry.is_deleting("a"));
    }
}
