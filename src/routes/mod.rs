//! Route metadata and the session-aware authorization guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard runs before every navigation; route metadata also supplies the
//! document title the shell applies after an allowed navigation.

pub mod guard;


use crate::session::{Role, RoleClaim};

/// Path of the login view; the only route reachable without a session.
pub const LOGIN_PATH: &str = "/login";
/// Default authenticated landing path (the trip list).
pub const LANDING_PATH: &str = "/trip";
/// Home path, used as the fail-closed redirect target.
pub const HOME_PATH: &str = "/";

/// Fallback document title for routes without metadata.
pub const DEFAULT_TITLE: &str = "Trip Review";

/// Static view metadata: path and document title.
const ROUTE_TITLES: &[(&str, &str)] = &[
    ("/trip", "Home"),
    ("/master/user", "User"),
    ("/master/driver", "Driver"),
    ("/master/car", "Car"),
    ("/master/company", "Company"),
    ("/master/division", "Division"),
    ("/master/e-money", "E-Money"),
];

/// Document title for a path, falling back to [`DEFAULT_TITLE`].
pub fn title_for(path: &str) -> &'static str {
    ROUTE_TITLES
        .iter()
        .find(|(route, _)| *route == path)
        .map_or(DEFAULT_TITLE, |(_, title)| *title)
}

/// Apply the document title for an allowed navigation target.
pub fn apply_title(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title_for(path));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Role-to-allowed-paths whitelist.
///
/// Standard staff see exactly the listed paths (exact matching, no prefix
/// logic, so a new sub-route needs an explicit entry). Admin's entry exists
/// to keep the superset invariant checkable even though the guard grants
/// Admin blanket access once past the login checks.
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<(Role, Vec<&'static str>)>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (Role::Admin, vec!["/", "/login", "/trip", "/master"]),
                (Role::Standard, vec!["/", "/login", "/trip"]),
            ],
        }
    }
}

impl RouteTable {
    /// Table with explicit entries; mainly useful to tests and to builds
    /// with a reduced route surface.
    pub fn with_entries(entries: Vec<(Role, Vec<&'static str>)>) -> Self {
        Self { entries }
    }

    /// Whitelisted paths for a role claim. `None` for claims with no entry;
    /// the guard fails closed on those.
    pub fn allowed_paths(&self, claim: RoleClaim) -> Option<&[&'static str]> {
        let role = claim.role()?;
        self.entries
            .iter()
            .find(|(entry_role, _)| *entry_role == role)
            .map(|(_, paths)| paths.as_slice())
    }
}
