//! The transport seam between stores and the wire.
//!
//! Stores describe calls as [`ApiRequest`] values and await the decoded
//! JSON body; swapping the implementation is how the whole core runs
//! natively under test and over `gloo-net` in the browser.

use serde_json::Value;

use super::error::TransportError;
use super::request::ApiRequest;

/// Issues API calls and returns the decoded JSON body on success.
///
/// Implementations do not retry and do not time requests out: a call runs
/// to completion or to transport failure. Browser futures are not `Send`,
/// so neither is this trait's future.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Perform one request. A non-success HTTP status is an error carrying
    /// whatever body the server sent.
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;
}
