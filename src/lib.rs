//! # tripops
//!
//! Core of a browser-resident operations console for a vehicle-trip
//! business: session-aware route authorization plus generic paginated
//! resource synchronization against the `/api/v1` REST surface.
//!
//! The crate draws its seams where the surrounding app plugs in: a
//! [`net::transport::Transport`] performs HTTP, a [`notify::Notify`] sink
//! receives classified failures, and the presentation layer reads store
//! state and drains the toast queue. The whole logic layer compiles
//! natively so the test suite runs without a browser; browser-only code
//! sits behind the `hydrate` feature.

pub mod config;
pub mod net;
pub mod notify;
pub mod routes;
pub mod session;
pub mod state;

/// Install panic and logging hooks for the browser build.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}
