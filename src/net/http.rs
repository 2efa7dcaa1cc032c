//! Browser HTTP transport over `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses become [`TransportError::Rejected`] carrying the
//! decoded body when there is one; requests that never complete and bodies
//! that fail to decode map to the transport-failure side of the taxonomy.

use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::config::{Mode, api_url};

use super::error::TransportError;
use super::request::{ApiRequest, Method, Part, PartValue, Payload};
use super::transport::Transport;

/// `gloo-net`-backed transport targeting the configured API base.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport {
    mode: Mode,
}

impl HttpTransport {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    fn url(&self, request: &ApiRequest) -> String {
        let base = api_url(self.mode, &request.path);
        if request.query.is_empty() {
            return base;
        }
        let query = request
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", urlencode(key), urlencode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{base}?{query}")
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let url = self.url(&request);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let sent = match request.payload {
            Some(Payload::Json(body)) => builder
                .json(&body)
                .map_err(|e| TransportError::Decode(e.to_string()))?
                .send()
                .await,
            Some(Payload::Multipart(parts)) => builder
                .body(build_form_data(&parts)?)
                .map_err(|e| TransportError::Decode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| TransportError::Network(e.to_string()))?;
        read_body(response).await
    }
}

async fn read_body(response: Response) -> Result<Value, TransportError> {
    if response.ok() {
        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);
        Err(TransportError::Rejected { status, body })
    }
}

fn build_form_data(parts: &[Part]) -> Result<web_sys::FormData, TransportError> {
    let form = web_sys::FormData::new()
        .map_err(|_| TransportError::Decode("form construction failed".to_owned()))?;
    for part in parts {
        match &part.value {
            PartValue::Text(text) => {
                form.append_with_str(&part.name, text)
                    .map_err(|_| TransportError::Decode("form field append failed".to_owned()))?;
            }
            PartValue::Bytes { data, filename, mime } => {
                let bytes = js_sys::Uint8Array::from(data.as_slice());
                let sequence = js_sys::Array::of1(&bytes);
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(mime);
                let blob =
                    web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                        .map_err(|_| {
                            TransportError::Decode("attachment blob construction failed".to_owned())
                        })?;
                form.append_with_blob_and_filename(&part.name, &blob, filename)
                    .map_err(|_| TransportError::Decode("form attachment append failed".to_owned()))?;
            }
        }
    }
    Ok(form)
}

fn urlencode(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}
