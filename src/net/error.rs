//! Transport failure taxonomy and user-facing classification.
//!
//! ERROR HANDLING
//! ==============
//! Every failure classifies into exactly one of two notices: a structured
//! server rejection (message shown verbatim) or a transport failure
//! (generic message). Neither is retried, and neither clears the session:
//! an authorization rejection leaves the cached session in place and the
//! user retries or logs out manually (see DESIGN.md).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

use crate::notify::{Notify, Toast};

/// A failed transport call.
#[derive(Clone, Debug, PartialEq)]
pub enum TransportError {
    /// The server was reached and answered with a non-success status.
    Rejected { status: u16, body: Value },
    /// The request never completed (unreachable host, aborted connection).
    Network(String),
    /// The response arrived but could not be decoded.
    Decode(String),
}

/// Fallback text shown when the server gave us nothing quotable.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// User-facing classification of a [`TransportError`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Structured rejection; the server's own message is shown verbatim.
    ApiRejection { message: String },
    /// No usable server response.
    TransportFailure,
}

impl Notice {
    /// Text handed to the notifier.
    pub fn display_message(&self) -> &str {
        match self {
            Notice::ApiRejection { message } => message,
            Notice::TransportFailure => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Classify a transport failure into the notice shown to the user.
///
/// A rejection only counts as structured when its body carries a string
/// `message`; anything else (HTML error pages, empty bodies, network and
/// decode failures) collapses to the generic notice.
pub fn classify(error: &TransportError) -> Notice {
    match error {
        TransportError::Rejected { body, .. } => body
            .get("message")
            .and_then(Value::as_str)
            .map_or(Notice::TransportFailure, |message| Notice::ApiRejection {
                message: message.to_owned(),
            }),
        TransportError::Network(_) | TransportError::Decode(_) => Notice::TransportFailure,
    }
}

/// Classify, log, and surface a failure through the notifier.
///
/// This is the single funnel every store failure passes through; callers
/// observe the failure only as the absence of a success value.
pub fn report(context: &str, error: &TransportError, notify: &mut impl Notify) {
    let notice = classify(error);
    log::warn!("{context} failed: {error:?}");
    notify.push(Toast::error(notice.display_message()));
}
