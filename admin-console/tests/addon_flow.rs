//! Add-on catalog CRUD and booking-flow display toggles.

mod support;

use admin_console::{AddonDisplay, AddonError, AddonRegistry, Confirmation, NoticeKind};
use shared::models::{AddonCategory, AddonDraft};
use support::FakeBackend;

fn draft(name: &str) -> AddonDraft {
    AddonDraft {
        name: name.into(),
        description: "Round trip".into(),
        price: 25.999,
        currency: "EUR".into(),
        category: AddonCategory::Transport,
        image: String::new(),
        duration: Some("45 min".into()),
        per_person: true,
    }
}

#[tokio::test]
async fn create_appears_only_with_server_id() {
    let backend = FakeBackend::new();
    let mut registry = AddonRegistry::load(&backend).await;

    let id = registry
        .create(&backend, draft("Airport Transfer"))
        .await
        .unwrap();
    assert_eq!(id, "addon-1");
    assert_eq!(registry.items().len(), 1);
    assert_eq!(registry.items()[0].id, "addon-1");
    // Price normalized to two decimals before the wire.
    assert_eq!(registry.items()[0].price, 26.0);
    assert_eq!(registry.notices.current().unwrap().kind, NoticeKind::Success);
}

#[tokio::test]
async fn create_without_name_issues_no_request() {
    let backend = FakeBackend::new();
    let mut registry = AddonRegistry::load(&backend).await;

    let err = registry.create(&backend, draft("   ")).await.unwrap_err();
    assert_eq!(err, AddonError::NameRequired);
    assert!(registry.items().is_empty());
    assert!(backend.addons.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_create_adds_nothing_locally() {
    let backend = FakeBackend::new();
    let mut registry = AddonRegistry::load(&backend).await;

    backend.set_fail_addon_calls(true);
    assert!(registry.create(&backend, draft("Spa")).await.is_err());
    assert!(registry.items().is_empty());
    assert_eq!(registry.notices.current().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn update_replaces_in_place_on_success_only() {
    let backend = FakeBackend::new();
    let mut registry = AddonRegistry::load(&backend).await;
    registry.create(&backend, draft("First")).await.unwrap();
    registry.create(&backend, draft("Second")).await.unwrap();

    registry
        .update(&backend, "addon-1", draft("First Renamed"))
        .await
        .unwrap();
    assert_eq!(registry.items()[0].name, "First Renamed");
    assert_eq!(registry.items()[1].name, "Second");

    backend.set_fail_addon_calls(true);
    assert!(
        registry
            .update(&backend, "addon-2", draft("Nope"))
            .await
            .is_err()
    );
    assert_eq!(registry.items()[1].name, "Second");
}

#[tokio::test]
async fn delete_requires_confirmation() {
    let backend = FakeBackend::new();
    let mut registry = AddonRegistry::load(&backend).await;
    registry.create(&backend, draft("Spa")).await.unwrap();

    registry
        .delete(&backend, "addon-1", Confirmation::Cancelled)
        .await
        .unwrap();
    assert_eq!(registry.items().len(), 1);

    registry
        .delete(&backend, "addon-1", Confirmation::Confirmed)
        .await
        .unwrap();
    assert!(registry.items().is_empty());
    assert!(backend.addons.lock().unwrap().is_empty());
    assert!(!registry.is_deleting("addon-1"));
}

#[tokio::test]
async fn failed_delete_keeps_the_item() {
    let backend = FakeBackend::new();
    let mut registry = AddonRegistry::load(&backend).await;
    registry.create(&backend, draft("Spa")).await.unwrap();

    backend.set_fail_addon_calls(true);
    assert!(
        registry
            .delete(&backend, "addon-1", Confirmation::Confirmed)
            .await
            .is_err()
    );
    assert_eq!(registry.items().len(), 1);
    assert!(!registry.is_deleting("addon-1"));
}

#[tokio::test]
async fn display_toggles_persist_optimistically_and_revert() {
    let backend = FakeBackend::new();
    let mut display = AddonDisplay::load(&backend).await;
    assert!(display.settings().show_addons_step);

    display.toggle_show_addons_step(&backend).await.unwrap();
    assert!(!display.settings().show_addons_step);
    assert!(!backend.addon_settings.lock().unwrap().show_addons_step);

    backend.set_fail_patches(true);
    assert!(display.toggle_group_by_category(&backend).await.is_err());
    // Rolled back to the last confirmed document.
    assert!(display.settings().group_addons_by_category);
    assert_eq!(display.notices.current().unwrap().kind, NoticeKind::Error);
}
