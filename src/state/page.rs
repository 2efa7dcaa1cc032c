//! Pagination cursor and page-envelope handling.
//!
//! DESIGN
//! ======
//! The server owns pagination truth: `current_page` and `total_pages` are
//! always overwritten from a response envelope, never computed locally.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Records per page requested by default.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Pagination position of one resource store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    /// Records per page. Fixed at store construction unless explicitly
    /// reconfigured before a fetch.
    pub limit: u32,
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            current_page: 1,
            total_pages: 1,
        }
    }
}

/// Base query parameters merged under caller-supplied filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: u32,
    pub current_page: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            current_page: 1,
        }
    }
}

impl PageQuery {
    /// Merge caller filters over the pagination defaults: a filter named
    /// `limit` or `currentPage` overrides the default pair, everything else
    /// passes through untouched.
    pub fn merge(&self, filters: &[(String, String)]) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(filters.len() + 2);
        if !filters.iter().any(|(key, _)| key == "limit") {
            params.push(("limit".to_owned(), self.limit.to_string()));
        }
        if !filters.iter().any(|(key, _)| key == "currentPage") {
            params.push(("currentPage".to_owned(), self.current_page.to_string()));
        }
        params.extend(filters.iter().cloned());
        params
    }
}

/// One fetched page of a collection plus the server's cursor values.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Parse a fetch envelope
/// `{ data: { <collection>: [...], totalPages, currentPage } }`.
///
/// Returns `None` when the collection or either cursor field is missing or
/// inconsistent; a malformed page counts as a decode failure so the store
/// state stays untouched.
pub fn parse_page<T: DeserializeOwned>(envelope: &Value, collection: &str) -> Option<Page<T>> {
    let data = envelope.get("data")?;
    let items: Vec<T> = serde_json::from_value(data.get(collection)?.clone()).ok()?;
    let current_page = page_number(data.get("currentPage")?)?;
    let total_pages = page_number(data.get("totalPages")?)?;
    if total_pages == 0 || current_page == 0 || current_page > total_pages {
        return None;
    }
    Some(Page {
        items,
        current_page,
        total_pages,
    })
}

/// Read a page number that may arrive as an integer or an integral float.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn page_number(value: &Value) -> Option<u32> {
    let as_int = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.is_finite() && n.fract() == 0.0 && *n >= 0.0)
            .map(|n| n as u64)
    })?;
    u32::try_from(as_int).ok()
}
