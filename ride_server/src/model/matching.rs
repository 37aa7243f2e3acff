//! Vehicle matching: rank available vehicles for a ride by pickup time.
use ride_common::RideQuoteRequest;
use serde::Serialize;

use crate::model::pricing::{self, MarketConditions, round2};
use crate::model::vehicle::{Vehicle, VehicleCategory};

/// Number of vehicles recommended when the request does not say.
pub const DEFAULT_TOP_K: usize = 3;

/// One vehicle offered for a ride.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Vehicle identifier.
    pub vehicle_id: String,
    /// Size class.
    pub category: VehicleCategory,
    /// Distance from the vehicle to the pickup point in kilometres.
    pub distance_km: f64,
    /// Minutes until the vehicle reaches the pickup point.
    pub eta_minutes: f64,
    /// Fare for the ride if this vehicle takes it.
    pub estimated_cost: f64,
}

/// Rank `candidates` (vehicle, km to pickup) by pickup time and keep the best `top_k`.
pub fn recommend(
    request: &RideQuoteRequest,
    candidates: &[(&Vehicle, f64)],
    market: &MarketConditions,
    top_k: usize,
) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = candidates
        .iter()
        .map(|&(vehicle, km)| {
            let fare = pricing::quote(request, &MarketConditions { pickup_km: km, ..*market });
            Recommendation {
                vehicle_id: vehicle.vehicle_id.clone(),
                category: vehicle.category,
                distance_km: round2(km),
                eta_minutes: round2(pricing::travel_minutes(km, request.traffic_level, market.hour)),
                estimated_cost: fare.cost,
            }
        })
        .collect();
    ranked.sort_by(|a, b| a.eta_minutes.total_cmp(&b.eta_minutes));
    ranked.truncate(top_k);
    ranked
}
