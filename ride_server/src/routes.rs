//! HTTP routes of the quote service.
//!
//! - `GET /` — liveness.
//! - `POST /vehicles/update` — upsert a vehicle into the fleet.
//! - `POST /ride/quote` — price a ride against the current fleet and recommend vehicles.
//!
//! Bodies that fail to decode or validate are answered with `400` and `{code, message}`.
use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use chrono::{Local, Timelike};
use log::info;
use ride_common::net::{QUOTE_PATH, VEHICLES_UPDATE_PATH};
use ride_common::{FieldError, FieldErrorReason, FormField, RideQuoteRequest, RideQuoteResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::ApiResult;
use crate::model::fleet::Fleet;
use crate::model::matching::{self, DEFAULT_TOP_K, Recommendation};
use crate::model::pricing::{self, MarketConditions};
use crate::model::vehicle::Vehicle;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Registered vehicles.
    pub fleet: Arc<RwLock<Fleet>>,
    clock: fn() -> u32,
}

impl AppState {
    /// Empty fleet, local wall clock.
    pub fn new() -> Self {
        Self::with_clock(local_hour)
    }

    /// Empty fleet with a custom source for the hour of day.
    pub fn with_clock(clock: fn() -> u32) -> Self {
        Self {
            fleet: Arc::new(RwLock::new(Fleet::new())),
            clock,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn local_hour() -> u32 {
    Local::now().hour()
}

/// Build the router with all routes bound to `state`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route(VEHICLES_UPDATE_PATH, post(update_vehicle))
        .route(QUOTE_PATH, post(ride_quote))
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "status": "API running successfully" }))
}

#[derive(Serialize)]
struct VehicleUpdated {
    message: &'static str,
    vehicle: Vehicle,
}

async fn update_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<Vehicle>, JsonRejection>,
) -> ApiResult<Json<VehicleUpdated>> {
    let Json(vehicle) = payload?;
    let stored = {
        let mut fleet = state.fleet.write()?;
        fleet.upsert(vehicle).clone()
    };
    info!(
        "Vehicle {} ({}) at {},{} available={}",
        stored.vehicle_id, stored.category, stored.latitude, stored.longitude, stored.available
    );
    Ok(Json(VehicleUpdated {
        message: "Vehicle updated successfully",
        vehicle: stored,
    }))
}

/// Quote body as it arrives on the wire.
///
/// Coordinates are optional because JSON can only carry NaN and infinity as `null`;
/// a missing or `null` field is reported as a field error instead of a decode failure.
#[derive(Debug, Deserialize)]
struct QuoteQuery {
    pickup_lat: Option<f64>,
    pickup_lng: Option<f64>,
    drop_lat: Option<f64>,
    drop_lng: Option<f64>,
    traffic_level: Option<i32>,
    #[serde(default = "default_top_k")]
    top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

impl QuoteQuery {
    fn into_request(self) -> Result<RideQuoteRequest, FieldError> {
        let coordinate = |field, value: Option<f64>| {
            value.ok_or_else(|| FieldError::new(field, FieldErrorReason::NotFinite))
        };
        let request = RideQuoteRequest {
            pickup_lat: coordinate(FormField::PickupLat, self.pickup_lat)?,
            pickup_lng: coordinate(FormField::PickupLng, self.pickup_lng)?,
            drop_lat: coordinate(FormField::DropLat, self.drop_lat)?,
            drop_lng: coordinate(FormField::DropLng, self.drop_lng)?,
            traffic_level: self.traffic_level.ok_or_else(|| {
                FieldError::new(
                    FormField::TrafficLevel,
                    FieldErrorReason::NotANumber("null".to_string()),
                )
            })?,
        };
        request.validate()?;
        Ok(request)
    }
}

/// Quote plus the vehicles best placed to serve it.
#[derive(Debug, Serialize)]
struct QuoteReply {
    #[serde(flatten)]
    quote: RideQuoteResponse,
    recommended_vehicles: Vec<Recommendation>,
}

async fn ride_quote(
    State(state): State<AppState>,
    payload: Result<Json<QuoteQuery>, JsonRejection>,
) -> ApiResult<Json<QuoteReply>> {
    let Json(query) = payload?;
    let top_k = query.top_k;
    let request = query.into_request()?;

    let (market, quote, recommended_vehicles) = {
        let fleet = state.fleet.read()?;
        let candidates = fleet.available_by_distance(request.pickup_lat, request.pickup_lng);
        let market = MarketConditions {
            hour: (state.clock)(),
            supply: candidates.len(),
            pickup_km: candidates.first().map(|&(_, km)| km).unwrap_or(0.0),
        };
        let quote = pricing::quote(&request, &market);
        let recommended = matching::recommend(&request, &candidates, &market, top_k);
        (market, quote, recommended)
    };
    info!(
        "Quote ({},{}) -> ({},{}) traffic={} supply={}: eta={} cost={} demand={} matched={}",
        request.pickup_lat,
        request.pickup_lng,
        request.drop_lat,
        request.drop_lng,
        request.traffic_level,
        market.supply,
        quote.eta,
        quote.cost,
        quote.demand,
        recommended_vehicles.len()
    );
    Ok(Json(QuoteReply {
        quote,
        recommended_vehicles,
    }))
}
