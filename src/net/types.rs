//! Wire DTOs for the console's REST surface.
//!
//! DESIGN
//! ======
//! These types mirror the server's response payloads so serde round-trips
//! stay lossless. Every id is server-assigned and opaque to the client;
//! numeric fields tolerate integral floats since the upstream stack is
//! loose about number representation.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A scheduled or completed vehicle trip, as listed on the trip pages.
///
/// Related records arrive pre-resolved to display names; the dropdown
/// endpoint supplies the ids used when creating or editing a trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Assigned driver's display name.
    #[serde(default)]
    pub driver: Option<String>,
    /// Assigned car's display name.
    #[serde(default)]
    pub car: Option<String>,
    /// Owning division's display name.
    #[serde(default)]
    pub division: Option<String>,
    /// E-money account used for tolls and fuel.
    #[serde(default)]
    pub e_money: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    /// ISO 8601 departure date string.
    #[serde(default)]
    pub departure_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A driver on the roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// URL of the uploaded photo, if one exists.
    #[serde(default)]
    pub photo: Option<String>,
}

/// A fleet vehicle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub plate_number: Option<String>,
}

/// A client company trips are driven for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// An internal division that owns trips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Division {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
}

/// An e-money account assigned to trips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EMoney {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub card_number: Option<String>,
    /// Remaining balance in the smallest currency unit.
    #[serde(default)]
    pub balance: Option<i64>,
}

/// A staff account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Wire role code (0 = admin, 1 = standard).
    #[serde(default)]
    pub role: Option<i64>,
}

/// Successful login payload: the bearer token plus the account's role code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginGrant {
    pub access_token: String,
    /// Wire role code; absent for accounts with no role assignment.
    #[serde(default)]
    pub role: Option<i64>,
}

/// Wire record carrying just an id and a display name; the dropdown
/// endpoint's option lists are sequences of these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRecord {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
}

/// A selection-control option projected from a fetched record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Display label (the record's name).
    pub title: String,
    /// Submitted identifier (the record's id).
    pub value: i64,
}

impl DropdownOption {
    pub fn from_record(record: NamedRecord) -> Self {
        Self { title: record.name, value: record.id }
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let Some(number) = value.as_number() else {
        return Err(D::Error::custom("expected number"));
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    match number.as_f64() {
        Some(float)
            if float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64 =>
        {
            Ok(float as i64)
        }
        _ => Err(D::Error::custom("expected integer-compatible number")),
    }
}
