//! Generic paginated resource store.
//!
//! DESIGN
//! ======
//! One store owns the current page of one collection plus its cursor, and
//! deliberately never mutates the collection after create/update/delete:
//! every mutation is followed by a server round-trip, which keeps the
//! client from drifting from the server's pagination truth.
//!
//! Two in-flight fetches on the same store resolve in completion order,
//! not issuance order; the store imposes no request-generation guard.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::net::error::{TransportError, report};
use crate::net::request::{ApiRequest, Payload, item_path};
use crate::net::transport::Transport;
use crate::notify::Notify;
use crate::session::SessionStore;
use crate::state::page::{Page, PageCursor, PageQuery, parse_page};

/// Static description of one resource kind: where it lives and how its
/// fetch envelope is keyed.
pub trait ResourceKind {
    /// Fetched record type.
    type Item: DeserializeOwned + Clone + std::fmt::Debug;
    /// Collection endpoint path under the API prefix, e.g. `/driver`.
    const ENDPOINT: &'static str;
    /// Envelope key holding the fetched collection, e.g. `drivers`.
    const COLLECTION: &'static str;
}

/// CRUD and pagination synchronization for one resource kind.
#[derive(Clone, Debug)]
pub struct ResourceStore<K: ResourceKind> {
    items: Vec<K::Item>,
    cursor: PageCursor,
    default_query: PageQuery,
}

impl<K: ResourceKind> Default for ResourceStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ResourceKind> ResourceStore<K> {
    /// Store with the default page size.
    pub fn new() -> Self {
        Self::with_query(PageQuery::default())
    }

    /// Store with an explicit base query snapshot.
    pub fn with_query(default_query: PageQuery) -> Self {
        Self {
            items: Vec::new(),
            cursor: PageCursor {
                limit: default_query.limit,
                ..PageCursor::default()
            },
            default_query,
        }
    }

    /// Reconfigure the page size. Meant to be called before any fetch; the
    /// limit is otherwise fixed for the store's lifetime.
    pub fn set_limit(&mut self, limit: u32) {
        self.default_query.limit = limit;
        self.cursor.limit = limit;
    }

    /// Current page of records: a view of the last successful fetch, not
    /// an accumulating cache.
    pub fn items(&self) -> &[K::Item] {
        &self.items
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Fetch one page, replacing the collection and cursor on success.
    ///
    /// `filters` are merged over the pagination defaults. On any failure
    /// the collection and cursor keep their pre-call values and the failure
    /// is classified for the notifier; callers see `None`.
    pub async fn fetch_page(
        &mut self,
        transport: &impl Transport,
        session: &SessionStore,
        notify: &mut impl Notify,
        filters: &[(String, String)],
    ) -> Option<()> {
        let request = ApiRequest::get(K::ENDPOINT)
            .queries(self.default_query.merge(filters))
            .bearer(session.token());
        match transport.send(request).await {
            Ok(envelope) => match parse_page::<K::Item>(&envelope, K::COLLECTION) {
                Some(page) => {
                    self.apply_page(page);
                    Some(())
                }
                None => {
                    let error = TransportError::Decode(format!(
                        "malformed {} page envelope",
                        K::COLLECTION
                    ));
                    report(K::ENDPOINT, &error, notify);
                    None
                }
            },
            Err(error) => {
                report(K::ENDPOINT, &error, notify);
                None
            }
        }
    }

    /// Create a record. Returns the raw acknowledgment envelope. The local
    /// collection is never touched; observe the new record via
    /// [`ResourceStore::fetch_page`].
    pub async fn create(
        &self,
        transport: &impl Transport,
        session: &SessionStore,
        notify: &mut impl Notify,
        payload: Payload,
    ) -> Option<Value> {
        let request = ApiRequest::post(K::ENDPOINT)
            .payload(payload)
            .bearer(session.token());
        self.mutate(transport, notify, request).await
    }

    /// Update a record by id. Same non-optimistic contract as
    /// [`ResourceStore::create`].
    pub async fn update(
        &self,
        transport: &impl Transport,
        session: &SessionStore,
        notify: &mut impl Notify,
        id: i64,
        payload: Payload,
    ) -> Option<Value> {
        let request = ApiRequest::patch(item_path(K::ENDPOINT, id))
            .payload(payload)
            .bearer(session.token());
        self.mutate(transport, notify, request).await
    }

    /// Delete a record by id. Same non-optimistic contract as
    /// [`ResourceStore::create`].
    pub async fn delete(
        &self,
        transport: &impl Transport,
        session: &SessionStore,
        notify: &mut impl Notify,
        id: i64,
    ) -> Option<Value> {
        let request = ApiRequest::delete(item_path(K::ENDPOINT, id)).bearer(session.token());
        self.mutate(transport, notify, request).await
    }

    fn apply_page(&mut self, page: Page<K::Item>) {
        self.items = page.items;
        self.cursor.current_page = page.current_page;
        self.cursor.total_pages = page.total_pages;
    }

    async fn mutate(
        &self,
        transport: &impl Transport,
        notify: &mut impl Notify,
        request: ApiRequest,
    ) -> Option<Value> {
        match transport.send(request).await {
            Ok(ack) => Some(ack),
            Err(error) => {
                report(K::ENDPOINT, &error, notify);
                None
            }
        }
    }
}
