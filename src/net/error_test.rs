use super::*;
use serde_json::json;

use crate::notify::{ToastKind, ToastQueue};

// =============================================================
// Classification
// =============================================================

#[test]
fn structured_rejection_classifies_with_the_server_message() {
    let error = TransportError::Rejected {
        status: 422,
        body: json!({ "message": "Plate number is taken" }),
    };
    assert_eq!(
        classify(&error),
        Notice::ApiRejection {
            message: "Plate number is taken".to_owned()
        }
    );
}

#[test]
fn rejection_without_a_message_is_a_transport_failure() {
    let no_body = TransportError::Rejected {
        status: 500,
        body: serde_json::Value::Null,
    };
    assert_eq!(classify(&no_body), Notice::TransportFailure);

    let wrong_shape = TransportError::Rejected {
        status: 400,
        body: json!({ "error": "nope" }),
    };
    assert_eq!(classify(&wrong_shape), Notice::TransportFailure);

    let non_string_message = TransportError::Rejected {
        status: 400,
        body: json!({ "message": 42 }),
    };
    assert_eq!(classify(&non_string_message), Notice::TransportFailure);
}

#[test]
fn network_and_decode_failures_are_transport_failures() {
    let network = TransportError::Network("connection refused".to_owned());
    let decode = TransportError::Decode("invalid json".to_owned());
    assert_eq!(classify(&network), Notice::TransportFailure);
    assert_eq!(classify(&decode), Notice::TransportFailure);
}

// =============================================================
// Display and reporting
// =============================================================

#[test]
fn rejection_message_is_shown_verbatim() {
    let notice = Notice::ApiRejection {
        message: "Wrong email or password".to_owned(),
    };
    assert_eq!(notice.display_message(), "Wrong email or password");
}

#[test]
fn transport_failure_shows_the_generic_message() {
    assert_eq!(
        Notice::TransportFailure.display_message(),
        GENERIC_FAILURE_MESSAGE
    );
}

#[test]
fn report_pushes_one_error_toast() {
    let mut toasts = ToastQueue::new();
    let error = TransportError::Rejected {
        status: 409,
        body: json!({ "message": "Division is in use" }),
    };

    report("/division", &error, &mut toasts);

    let toast = toasts.pop().expect("toast");
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Division is in use");
    assert!(toasts.is_empty());
}
