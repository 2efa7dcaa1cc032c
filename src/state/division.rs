//! Division store.
//!
//! The API exposes no update for divisions; records are created and
//! deleted whole.

use crate::net::types::Division;
use crate::state::resource::{ResourceKind, ResourceStore};

/// Marker for the `/division` collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct DivisionKind;

impl ResourceKind for DivisionKind {
    type Item = Division;
    const ENDPOINT: &'static str = "/division";
    const COLLECTION: &'static str = "divisions";
}

/// Paginated division store.
pub type DivisionStore = ResourceStore<DivisionKind>;
