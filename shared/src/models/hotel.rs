//! Hotel (tenant) summaries

use serde::{Deserialize, Serialize};

/// Hotel entry as returned by `GET /admin/hotels` for the current account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub location: String,
}

/// Hotel entry for the super-admin listing, with owner contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuperAdminHotel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub location: String,
    pub country: Option<String>,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub owner_email: String,
}

impl SuperAdminHotel {
    /// Case-insensitive match over name, slug, location, and owner fields.
    pub fn matches_query(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&q)
            || self.slug.to_lowercase().contains(&q)
            || self.location.to_lowercase().contains(&q)
            || self.owner_name.to_lowercase().contains(&q)
            || self.owner_email.to_lowercase().contains(&q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel() -> SuperAdminHotel {
        SuperAdminHotel {
            id: "h1".into(),
            name: "Alpine Lodge".into(),
            slug: "alpine-lodge".into(),
            location: "Innsbruck".into(),
            country: Some("Austria".into()),
            owner_name: "Mara Lindt".into(),
            owner_email: "mara@alpinelodge.at".into(),
        }
    }

    #[test]
    fn matches_owner_email() {
        assert!(hotel().matches_query("alpinelodge.at"));
    }

    #[test]
    fn empty_query_matches_all() {
        assert!(hotel().matches_query(""));
    }

    #[test]
    fn unrelated_query_does_not_match() {
        assert!(!hotel().matches_query("seaside"));
    }
}
