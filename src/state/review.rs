//! Public trip-review submission.
//!
//! The review page is reachable without a session, so this call carries no
//! bearer token.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use serde_json::{Value, json};

use crate::net::error::report;
use crate::net::request::ApiRequest;
use crate::net::transport::Transport;
use crate::notify::Notify;

const REVIEW_ENDPOINT: &str = "/review";

/// Review form input for one completed trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewInput {
    pub trip_id: i64,
    /// Star rating, 1..=5.
    pub rating: u8,
    pub comment: String,
}

/// Submit a review. Returns the raw acknowledgment on success.
pub async fn submit_review(
    transport: &impl Transport,
    notify: &mut impl Notify,
    input: &ReviewInput,
) -> Option<Value> {
    let request = ApiRequest::post(REVIEW_ENDPOINT).json(json!({
        "tripId": input.trip_id,
        "rating": input.rating,
        "comment": input.comment,
    }));
    match transport.send(request).await {
        Ok(ack) => Some(ack),
        Err(error) => {
            report(REVIEW_ENDPOINT, &error, notify);
            None
        }
    }
}
