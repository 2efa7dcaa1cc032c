//! Networking modules for the REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `request` describes individual calls,
//! `transport` is the seam the stores are driven through, `http` performs
//! real browser requests, and `error` classifies failures for the notifier.

pub mod error;
#[cfg(feature = "hydrate")]
pub mod http;
pub mod request;
pub mod transport;
pub mod types;
