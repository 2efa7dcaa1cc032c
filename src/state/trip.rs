//! Trip store: paginated list, public detail view, and the trip-form
//! dropdown projections.

#[cfg(test)]
#[path = "trip_test.rs"]
mod trip_test;

use serde_json::Value;

use crate::net::error::{TransportError, report};
use crate::net::request::{ApiRequest, item_path};
use crate::net::transport::Transport;
use crate::net::types::{DropdownOption, NamedRecord, Trip};
use crate::notify::Notify;
use crate::session::SessionStore;
use crate::state::resource::{ResourceKind, ResourceStore};

/// Marker for the `/trip` collection.
#[derive(Clone, Copy, Debug, Default)]
pub struct TripKind;

impl ResourceKind for TripKind {
    type Item = Trip;
    const ENDPOINT: &'static str = "/trip";
    const COLLECTION: &'static str = "trips";
}

/// Endpoint returning every trip-form option list in one response.
const DROPDOWN_ENDPOINT: &str = "/dropdown/trip-form";

/// Option lists for the trip form, one named slot per related resource.
/// Replaced wholesale on every dropdown fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropdownSlots {
    pub drivers: Vec<DropdownOption>,
    pub cars: Vec<DropdownOption>,
    pub divisions: Vec<DropdownOption>,
    pub emoneys: Vec<DropdownOption>,
}

/// Trip list plus the extras the trip pages need.
#[derive(Clone, Debug, Default)]
pub struct TripStore {
    /// Paginated trip list with the uniform CRUD operations.
    pub list: ResourceStore<TripKind>,
    /// Detail record for the public review page, if one has been fetched.
    pub trip: Option<Trip>,
    pub dropdown: DropdownSlots,
}

impl TripStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch one trip by id for the public review page. No token is
    /// attached; the review page is reachable without a session.
    pub async fn fetch_detail(
        &mut self,
        transport: &impl Transport,
        notify: &mut impl Notify,
        trip_id: i64,
    ) -> Option<()> {
        let request = ApiRequest::get(item_path(TripKind::ENDPOINT, trip_id));
        match transport.send(request).await {
            Ok(envelope) => match parse_detail(&envelope) {
                Some(trip) => {
                    self.trip = Some(trip);
                    Some(())
                }
                None => {
                    let error =
                        TransportError::Decode("malformed trip detail envelope".to_owned());
                    report(TripKind::ENDPOINT, &error, notify);
                    None
                }
            },
            Err(error) => {
                report(TripKind::ENDPOINT, &error, notify);
                None
            }
        }
    }

    /// Fetch all trip-form option lists and project them into dropdown
    /// slots. Slots are replaced wholesale; a failed fetch leaves them
    /// untouched.
    pub async fn fetch_dropdown(
        &mut self,
        transport: &impl Transport,
        session: &SessionStore,
        notify: &mut impl Notify,
    ) -> Option<()> {
        let request = ApiRequest::get(DROPDOWN_ENDPOINT).bearer(session.token());
        match transport.send(request).await {
            Ok(envelope) => match parse_dropdown(&envelope) {
                Some(slots) => {
                    self.dropdown = slots;
                    Some(())
                }
                None => {
                    let error =
                        TransportError::Decode("malformed dropdown envelope".to_owned());
                    report(DROPDOWN_ENDPOINT, &error, notify);
                    None
                }
            },
            Err(error) => {
                report(DROPDOWN_ENDPOINT, &error, notify);
                None
            }
        }
    }
}

fn parse_detail(envelope: &Value) -> Option<Trip> {
    serde_json::from_value(envelope.get("data")?.get("trip")?.clone()).ok()
}

fn parse_dropdown(envelope: &Value) -> Option<DropdownSlots> {
    let data = envelope.get("data")?;
    Some(DropdownSlots {
        drivers: project_options(data.get("drivers")?)?,
        cars: project_options(data.get("cars")?)?,
        divisions: project_options(data.get("divisions")?)?,
        emoneys: project_options(data.get("emoneys")?)?,
    })
}

/// Project `{ id, name }` records into `{ title, value }` options.
fn project_options(list: &Value) -> Option<Vec<DropdownOption>> {
    let records: Vec<NamedRecord> = serde_json::from_value(list.clone()).ok()?;
    Some(records.into_iter().map(DropdownOption::from_record).collect())
}
