//! Quote request/response payloads exchanged with the ride quote service.
//!
//! All types are encoded as JSON with `serde_json`; field names are the wire keys.
use serde::{Deserialize, Serialize};

use crate::form::{self, FieldError, FormField};

/// A validated request for a ride quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RideQuoteRequest {
    /// Pickup latitude in degrees.
    pub pickup_lat: f64,
    /// Pickup longitude in degrees.
    pub pickup_lng: f64,
    /// Drop latitude in degrees.
    pub drop_lat: f64,
    /// Drop longitude in degrees.
    pub drop_lng: f64,
    /// Traffic level, `0..=3`.
    pub traffic_level: i32,
}

impl RideQuoteRequest {
    /// Re-check a request that arrived already parsed, e.g. from the wire.
    pub fn validate(&self) -> Result<(), FieldError> {
        form::check_coordinate(FormField::PickupLat, self.pickup_lat, form::LATITUDE_RANGE)?;
        form::check_coordinate(FormField::PickupLng, self.pickup_lng, form::LONGITUDE_RANGE)?;
        form::check_coordinate(FormField::DropLat, self.drop_lat, form::LATITUDE_RANGE)?;
        form::check_coordinate(FormField::DropLng, self.drop_lng, form::LONGITUDE_RANGE)?;
        form::check_traffic_level(self.traffic_level)?;
        Ok(())
    }
}

/// A request built without validation.
///
/// `NaN` coordinates and a `None` traffic level stand for "not a number";
/// `serde_json` writes both as `null`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UncheckedQuoteRequest {
    /// Pickup latitude, `NaN` if unparsable.
    pub pickup_lat: f64,
    /// Pickup longitude, `NaN` if unparsable.
    pub pickup_lng: f64,
    /// Drop latitude, `NaN` if unparsable.
    pub drop_lat: f64,
    /// Drop longitude, `NaN` if unparsable.
    pub drop_lng: f64,
    /// Traffic level, `None` if unparsable.
    pub traffic_level: Option<i32>,
}

/// Quote returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RideQuoteResponse {
    /// Estimated time of arrival in minutes.
    pub eta: f64,
    /// Estimated cost in currency units.
    pub cost: f64,
    /// Dimensionless demand index.
    pub demand: f64,
}
