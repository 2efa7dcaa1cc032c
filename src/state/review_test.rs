use super::*;
use futures::executor::block_on;

use crate::net::request::{Method, Payload};
use crate::net::transport::testing::FakeTransport;
use crate::net::error::TransportError;
use crate::notify::ToastQueue;

fn input() -> ReviewInput {
    ReviewInput {
        trip_id: 9,
        rating: 4,
        comment: "Smooth ride".to_owned(),
    }
}

#[test]
fn submit_review_posts_without_a_token() {
    let transport = FakeTransport::respond_with(Ok(json!({ "message": "thanks" })));
    let mut toasts = ToastQueue::new();

    let ack = block_on(submit_review(&transport, &mut toasts, &input()));

    assert!(ack.is_some());
    assert!(toasts.is_empty());

    let request = transport.last_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/review");
    assert_eq!(request.bearer, None);
    assert_eq!(
        request.payload,
        Some(Payload::Json(json!({
            "tripId": 9,
            "rating": 4,
            "comment": "Smooth ride"
        })))
    );
}

#[test]
fn rejected_review_shows_the_server_message() {
    let transport = FakeTransport::respond_with(Err(TransportError::Rejected {
        status: 409,
        body: json!({ "message": "Trip already reviewed" }),
    }));
    let mut toasts = ToastQueue::new();

    let ack = block_on(submit_review(&transport, &mut toasts, &input()));

    assert_eq!(ack, None);
    assert_eq!(toasts.pop().expect("toast").message, "Trip already reviewed");
}
