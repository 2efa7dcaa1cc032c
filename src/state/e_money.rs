//! E-money account store.
//!
//! Like divisions, e-money accounts have no update endpoint; records are
//! created and deleted whole.

use crate::net::types::EMoney;
use crate::state::resource::{ResourceKind, ResourceStore};

/// Marker for the `/e-money` collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct EMoneyKind;

impl ResourceKind for EMoneyKind {
    type Item = EMoney;
    const ENDPOINT: &'static str = "/e-money";
    const COLLECTION: &'static str = "eMoneys";
}

/// Paginated e-money account store.
pub type EMoneyStore = ResourceStore<EMoneyKind>;
