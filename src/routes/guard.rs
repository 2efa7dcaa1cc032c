//! Session-aware navigation guard.
//!
//! Pure decision logic: no IO, no state mutation, total over every
//! (session, path) input. The branch order is load-bearing: token
//! presence is checked before any role handling, and Admin's blanket
//! allowance only applies once the login-page redirects are resolved.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::{Role, Session};

use super::{HOME_PATH, LANDING_PATH, LOGIN_PATH, RouteTable};

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Enter the requested view.
    Allow,
    /// Navigate elsewhere instead.
    Redirect(&'static str),
}

/// Decide whether `target_path` may be entered with the given session.
pub fn decide(session: &Session, table: &RouteTable, target_path: &str) -> RouteDecision {
    // 1. Unauthenticated visitors only get the login page.
    if session.token.is_none() && target_path != LOGIN_PATH {
        return RouteDecision::Redirect(LOGIN_PATH);
    }

    // 2. Authenticated visitors are bounced off the login page.
    if session.token.is_some() && target_path == LOGIN_PATH {
        return RouteDecision::Redirect(LANDING_PATH);
    }

    // 3. Role-based whitelist. Claims without a table entry (unrecognized
    //    role codes included) fail closed.
    if let Some(claim) = session.role {
        let Some(allowed) = table.allowed_paths(claim) else {
            return RouteDecision::Redirect(HOME_PATH);
        };
        return match claim.role() {
            Some(Role::Admin) => RouteDecision::Allow,
            _ => {
                if allowed.contains(&target_path) {
                    RouteDecision::Allow
                } else {
                    RouteDecision::Redirect(HOME_PATH)
                }
            }
        };
    }

    // 4. Token without a role claim: permissive fallback.
    RouteDecision::Allow
}
