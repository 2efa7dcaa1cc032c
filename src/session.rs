//! Cached authenticated identity for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and every resource store read the session from here;
//! nothing else mutates it. The store performs no validation of token
//! well-formedness or expiry; it is a dumb identity cache, and the server
//! stays the authority on whether a token is still good.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "tripops_session";

/// Staff authorization level. The wire encoding is a small integer
/// (0 = admin, 1 = standard).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Standard,
}

impl Role {
    /// Decode a wire role code. Unknown codes yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Role::Admin),
            1 => Some(Role::Standard),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Role::Admin => 0,
            Role::Standard => 1,
        }
    }
}

/// A role claim as the server sent it: a recognized role, or the raw code
/// when the code is not one we know. Unrecognized codes are kept rather
/// than erased so authorization can fail closed on them instead of
/// silently widening access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleClaim {
    Known(Role),
    Unknown(i64),
}

impl RoleClaim {
    pub fn from_code(code: i64) -> Self {
        Role::from_code(code).map_or(RoleClaim::Unknown(code), RoleClaim::Known)
    }

    pub fn code(self) -> i64 {
        match self {
            RoleClaim::Known(role) => role.code(),
            RoleClaim::Unknown(code) => code,
        }
    }

    /// The recognized role, if this claim carries one.
    pub fn role(self) -> Option<Role> {
        match self {
            RoleClaim::Known(role) => Some(role),
            RoleClaim::Unknown(_) => None,
        }
    }
}

/// The client's cached proof of authentication plus authorization level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<RoleClaim>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Persistence record. Token and role travel as ONE document so a reader
/// can never observe a token without its role or vice versa.
#[cfg(feature = "hydrate")]
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
    role: Option<i64>,
}

/// Owner of the current [`Session`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted session, if any. Memory-only on native builds.
    pub fn restore() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if let Some(record) = read_persisted() {
                return Self {
                    session: Session {
                        token: Some(record.token),
                        role: record.role.map(RoleClaim::from_code),
                    },
                };
            }
        }
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The bearer token, cloned for a request description.
    pub fn token(&self) -> Option<String> {
        self.session.token.clone()
    }

    /// Establish a session. Both fields are written together, and the
    /// persisted copy is a single record for the same reason.
    pub fn set(&mut self, token: impl Into<String>, role: Option<RoleClaim>) {
        let token = token.into();
        #[cfg(feature = "hydrate")]
        write_persisted(&PersistedSession {
            token: token.clone(),
            role: role.map(RoleClaim::code),
        });
        self.session = Session {
            token: Some(token),
            role,
        };
    }

    /// Drop the session, in memory and in persistent storage.
    pub fn clear(&mut self) {
        #[cfg(feature = "hydrate")]
        clear_persisted();
        self.session = Session::default();
    }
}

#[cfg(feature = "hydrate")]
fn read_persisted() -> Option<PersistedSession> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

#[cfg(feature = "hydrate")]
fn write_persisted(record: &PersistedSession) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = serde_json::to_string(record) {
                let _ = storage.set_item(STORAGE_KEY, &raw);
            }
        }
    }
}

#[cfg(feature = "hydrate")]
fn clear_persisted() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
