//! Deployment-mode API base-url configuration.
//!
//! The console talks to one REST surface under `/api/v1`; only the base
//! host differs between local development and production builds.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Deployment mode selecting which base URL the transport targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Local,
    Production,
}

/// Path prefix shared by every API endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Base host for the given deployment mode.
///
/// Production builds are served same-origin, so the base collapses to the
/// empty string and requests use relative URLs.
pub fn base_url(mode: Mode) -> &'static str {
    match mode {
        Mode::Local => "http://localhost:3000",
        Mode::Production => "",
    }
}

/// Full URL for an API path. `path` must start with `/`.
pub fn api_url(mode: Mode, path: &str) -> String {
    format!("{}{API_PREFIX}{path}", base_url(mode))
}
