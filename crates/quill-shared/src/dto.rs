//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Default page size for listings.
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Largest page size a client may request.
pub const MAX_PER_PAGE: u64 = 100;

/// Body of a create or update request.
///
/// `title` is optional at the wire level so that a missing title is reported
/// as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub title: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Query string of a listing request.
///
/// Both values are signed so that zero or negative input is clamped rather
/// than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PageQuery {
    /// Requested page, never below 1.
    pub fn page(&self) -> u64 {
        self.page.map_or(1, |page| page.max(1).unsigned_abs())
    }

    /// Requested page size, clamped to `1..=MAX_PER_PAGE`.
    pub fn per_page(&self) -> u64 {
        self.per_page.map_or(DEFAULT_PER_PAGE, |per_page| {
            per_page.clamp(1, MAX_PER_PAGE as i64).unsigned_abs()
        })
    }
}

/// Paginated listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Position of a page within a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub last_page: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_defaults_and_clamps() {
        let query = PageQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), DEFAULT_PER_PAGE);

        let query = PageQuery {
            page: Some(0),
            per_page: Some(10_000),
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), MAX_PER_PAGE);

        let query = PageQuery {
            page: Some(3),
            per_page: Some(0),
        };
        assert_eq!(query.page(), 3);
        assert_eq!(query.per_page(), 1);
    }

    #[test]
    fn test_page_query_negative_values_clamp() {
        let query: PageQuery = serde_json::from_str(r#"{"page":-1,"per_page":-5}"#).unwrap();
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), 1);

        let query = PageQuery {
            page: Some(i64::MIN),
            per_page: Some(i64::MAX),
        };
        assert_eq!(query.page(), 1);
        assert_eq!(query.per_page(), MAX_PER_PAGE);
    }

    #[test]
    fn test_payload_title_is_optional() {
        let payload: PostPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.title.is_none());

        let payload: PostPayload = serde_json::from_str(r#"{"title":null}"#).unwrap();
        assert!(payload.title.is_none());

        let payload: PostPayload = serde_json::from_str(r#"{"title":"hola"}"#).unwrap();
        assert_eq!(payload.title.as_deref(), Some("hola"));
    }
}
