//! Staff account store.

use crate::net::types::User;
use crate::state::resource::{ResourceKind, ResourceStore};

/// Marker for the `/user` collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserKind;

impl ResourceKind for UserKind {
    type Item = User;
    const ENDPOINT: &'static str = "/user";
    const COLLECTION: &'static str = "users";
}

/// Paginated staff-account store.
pub type UserStore = ResourceStore<UserKind>;
