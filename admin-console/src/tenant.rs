//! Tenant resolution and switching.
//!
//! A hotel admin may administer several hotels; the console pins one as
//! the active tenant and remembers it across launches. Super admins browse
//! every hotel and can drop into any tenant's console.

use console_client::{ClientResult, HotelApi};
use shared::models::{HotelSummary, SuperAdminHotel};

use crate::app::Route;
use crate::session::SessionContext;
use crate::store::StateStore;

/// Outcome of an explicit tenant switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantSwitch {
    /// Already the active tenant; nothing to do.
    Unchanged,
    /// New tenant persisted; the shell must reload all tenant-scoped state.
    Reloaded,
}

/// Resolve the active tenant against the account's hotel list.
///
/// A persisted selection wins if it still exists; anything else falls back
/// deterministically to the first hotel. The resolved id is always written
/// back, so a stale selection heals itself on the next launch.
pub async fn resolve<S: StateStore>(
    ctx: &mut SessionContext<S>,
    api: &impl HotelApi,
) -> ClientResult<Option<HotelSummary>> {
    let hotels = api.list_hotels().await?;
    let Some(first) = hotels.first() else {
        return Ok(None);
    };

    let selected = ctx
        .selected_hotel_id()
        .and_then(|id| hotels.iter().find(|h| h.id == id))
        .unwrap_or(first)
        .clone();

    ctx.set_selected_hotel_id(&selected.id);
    tracing::debug!(hotel = %selected.id, "Active tenant resolved");
    Ok(Some(selected))
}

/// Switch the active tenant. Selecting the current tenant is a no-op;
/// anything else persists and demands a full reload.
pub fn select<S: StateStore>(ctx: &mut SessionContext<S>, hotel_id: &str) -> TenantSwitch {
    if ctx.selected_hotel_id().as_deref() == Some(hotel_id) {
        return TenantSwitch::Unchanged;
    }
    ctx.set_selected_hotel_id(hotel_id);
    tracing::info!(hotel = %hotel_id, "Switched tenant");
    TenantSwitch::Reloaded
}

/// Super-admin entry into a tenant's console: pin the tenant and land in
/// its design studio.
pub fn configure_as<S: StateStore>(ctx: &mut SessionContext<S>, hotel_id: &str) -> Route {
    ctx.set_selected_hotel_id(hotel_id);
    tracing::info!(hotel = %hotel_id, "Configuring tenant as super admin");
    Route::DesignStudio
}

/// Filter the platform-wide hotel list for the manage-hotels page.
/// A blank query returns everything.
pub fn search<'a>(hotels: &'a [SuperAdminHotel], query: &str) -> Vec<&'a SuperAdminHotel> {
    let query = query.trim();
    if query.is_empty() {
        return hotels.iter().collect();
    }
    hotels.iter().filter(|h| h.matches_query(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn hotel(id: &str, name: &str) -> SuperAdminHotel {
        SuperAdminHotel {
            id: id.into(),
            name: name.into(),
            slug: name.to_lowercase(),
            location: "Lombok".into(),
            country: Some("Indonesia".into()),
            owner_name: "Ana".into(),
            owner_email: "ana@example.com".into(),
        }
    }

    #[test]
    fn select_same_tenant_is_noop() {
        let mut ctx = SessionContext::new(MemoryStore::new());
        ctx.set_selected_hotel_id("h1");
        assert_eq!(select(&mut ctx, "h1"), TenantSwitch::Unchanged);
        assert_eq!(select(&mut ctx, "h2"), TenantSwitch::Reloaded);
        assert_eq!(ctx.selected_hotel_id().as_deref(), Some("h2"));
    }

    #[test]
    fn configure_as_pins_tenant_and_routes_to_studio() {
        let mut ctx = SessionContext::new(MemoryStore::new());
        assert_eq!(configure_as(&mut ctx, "h9"), Route::DesignStudio);
        assert_eq!(ctx.selected_hotel_id().as_deref(), Some("h9"));
    }

    #[test]
    fn search_blank_query_returns_all() {
        let hotels = vec![hotel("h1", "Sundancer"), hotel("h2", "Coral Bay")];
        assert_eq!(search(&hotels, "  ").len(), 2);
        let hits = search(&hotels, "coral");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "h2");
    }
}
