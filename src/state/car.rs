//! Fleet vehicle store.

use crate::net::types::Car;
use crate::state::resource::{ResourceKind, ResourceStore};

/// Marker for the `/car` collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct CarKind;

impl ResourceKind for CarKind {
    type Item = Car;
    const ENDPOINT: &'static str = "/car";
    const COLLECTION: &'static str = "cars";
}

/// Paginated fleet-vehicle store.
pub type CarStore = ResourceStore<CarKind>;
