//! Login, password change, and logout.
//!
//! Login is the one place a session is created: a successful grant writes
//! the token and role claim to the session store atomically. A rejected
//! login (or any later authorization rejection) never clears an existing
//! session; see DESIGN.md.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::{Value, json};

use crate::net::error::{TransportError, report};
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;
use crate::net::types::LoginGrant;
use crate::notify::Notify;
use crate::session::{RoleClaim, SessionStore};

const LOGIN_ENDPOINT: &str = "/auth/login";
const PASSWORD_ENDPOINT: &str = "/auth/password";

/// Login form input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Authenticate and establish the session.
///
/// No token is attached; this is the call that obtains one.
pub async fn login(
    transport: &impl Transport,
    session: &mut SessionStore,
    notify: &mut impl Notify,
    credentials: &Credentials,
) -> Option<()> {
    let request = ApiRequest::post(LOGIN_ENDPOINT).json(json!({
        "email": credentials.email,
        "password": credentials.password,
    }));
    match transport.send(request).await {
        Ok(envelope) => match parse_grant(&envelope) {
            Some(grant) => {
                session.set(grant.access_token, grant.role.map(RoleClaim::from_code));
                Some(())
            }
            None => {
                let error = TransportError::Decode("malformed login grant".to_owned());
                report(LOGIN_ENDPOINT, &error, notify);
                None
            }
        },
        Err(error) => {
            report(LOGIN_ENDPOINT, &error, notify);
            None
        }
    }
}

/// Change the current user's password.
pub async fn change_password(
    transport: &impl Transport,
    session: &SessionStore,
    notify: &mut impl Notify,
    input: Value,
) -> Option<Value> {
    let request = ApiRequest::patch(PASSWORD_ENDPOINT)
        .json(input)
        .bearer(session.token());
    match transport.send(request).await {
        Ok(ack) => Some(ack),
        Err(error) => {
            report(PASSWORD_ENDPOINT, &error, notify);
            None
        }
    }
}

/// Drop the cached session. Purely local: the token itself is not revoked
/// server-side.
pub fn logout(session: &mut SessionStore) {
    session.clear();
}

fn parse_grant(envelope: &Value) -> Option<LoginGrant> {
    serde_json::from_value(envelope.get("data")?.clone()).ok()
}
