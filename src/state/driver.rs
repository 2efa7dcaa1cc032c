//! Driver roster store.
//!
//! Driver create/update carry a photo attachment, so payloads encode as
//! multipart form data rather than JSON.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use crate::net::request::{Part, PartValue, Payload};
use crate::net::types::Driver;
use crate::state::resource::{ResourceKind, ResourceStore};

/// Marker for the `/driver` collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct DriverKind;

impl ResourceKind for DriverKind {
    type Item = Driver;
    const ENDPOINT: &'static str = "/driver";
    const COLLECTION: &'static str = "drivers";
}

/// Paginated driver store.
pub type DriverStore = ResourceStore<DriverKind>;

/// Photo attachment for a driver form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverPhoto {
    pub data: Vec<u8>,
    pub filename: String,
    pub mime: String,
}

/// Driver create/update form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverForm {
    pub name: String,
    pub phone: Option<String>,
    pub photo: Option<DriverPhoto>,
}

impl DriverForm {
    /// Multipart payload for `POST /driver` and `PATCH /driver/{id}`.
    pub fn into_payload(self) -> Payload {
        let mut parts = vec![Part {
            name: "name".to_owned(),
            value: PartValue::Text(self.name),
        }];
        if let Some(phone) = self.phone {
            parts.push(Part {
                name: "phone".to_owned(),
                value: PartValue::Text(phone),
            });
        }
        if let Some(photo) = self.photo {
            parts.push(Part {
                name: "photo".to_owned(),
                value: PartValue::Bytes {
                    data: photo.data,
                    filename: photo.filename,
                    mime: photo.mime,
                },
            });
        }
        Payload::Multipart(parts)
    }
}
