//! Inert request descriptions for the REST surface.
//!
//! DESIGN
//! ======
//! A store describes the call it wants as an [`ApiRequest`]; the transport
//! decides how to put it on the wire. Keeping the description inert is what
//! lets every store run natively under test without a browser.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde_json::Value;

/// HTTP method subset used by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// One multipart field: a text value or a named binary attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    Bytes {
        data: Vec<u8>,
        filename: String,
        mime: String,
    },
}

/// A named multipart form part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

/// Request body encoding. Most resources post JSON; driver forms carry a
/// photo attachment and go out as multipart form data.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    Json(Value),
    Multipart(Vec<Part>),
}

/// Description of one API call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path relative to the `/api/v1` prefix, e.g. `/driver/3`.
    pub path: String,
    /// Query pairs, already stringified.
    pub query: Vec<(String, String)>,
    pub payload: Option<Payload>,
    /// Bearer token attached as `Authorization` when the endpoint needs one.
    pub bearer: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            payload: None,
            bearer: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn queries(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.payload = Some(Payload::Json(body));
        self
    }

    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }
}

/// Path for one item under a collection endpoint, e.g. `/driver/3`.
pub fn item_path(endpoint: &str, id: i64) -> String {
    format!("{endpoint}/{id}")
}
