//! Client company store.

use crate::net::types::Company;
use crate::state::resource::{ResourceKind, ResourceStore};

/// Marker for the `/company` collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompanyKind;

impl ResourceKind for CompanyKind {
    type Item = Company;
    const ENDPOINT: &'static str = "/company";
    const COLLECTION: &'static str = "companies";
}

/// Paginated client-company store.
pub type CompanyStore = ResourceStore<CompanyKind>;
