//! Quote computation: ETA, demand index and fare.
//!
//! Distances come from [`haversine_km`]; the time of day only matters through the
//! peak-hour flag so callers pass the local hour in explicitly.
use ride_common::{RideQuoteRequest, RideQuoteResponse};

use crate::model::geo::haversine_km;

/// Hours (local, 24h) treated as rush hour.
pub const PEAK_HOURS: [u32; 6] = [8, 9, 10, 17, 18, 19];
/// Minutes per kilometre in free-flowing traffic.
pub const MINUTES_PER_KM: f64 = 2.0;
/// Extra travel time per traffic level, as a fraction.
pub const TRAFFIC_SLOWDOWN: f64 = 0.25;
/// Travel time multiplier during peak hours.
pub const PEAK_SLOWDOWN: f64 = 1.2;
/// Flat fare component.
pub const BASE_FARE: f64 = 30.0;
/// Fare per kilometre of trip distance.
pub const PER_KM: f64 = 8.0;
/// Fare per minute of ETA.
pub const PER_MIN: f64 = 2.0;

/// Everything a quote depends on besides the request itself.
#[derive(Debug, Clone, Copy)]
pub struct MarketConditions {
    /// Local hour of day, `0..24`.
    pub hour: u32,
    /// Vehicles currently available.
    pub supply: usize,
    /// Distance from pickup to the nearest available vehicle, `0` when none.
    pub pickup_km: f64,
}

/// Whether `hour` falls in rush hour.
pub fn is_peak_hour(hour: u32) -> bool {
    PEAK_HOURS.contains(&hour)
}

/// Surge multiplier for a demand index; never below `1.0`.
pub fn surge_multiplier(demand: f64) -> f64 {
    1.0 + ((demand - 1.0) * 0.5).max(0.0)
}

/// Driving time in minutes for `km` kilometres at the given traffic level and hour.
pub fn travel_minutes(km: f64, traffic_level: i32, hour: u32) -> f64 {
    let minutes = km * MINUTES_PER_KM * (1.0 + TRAFFIC_SLOWDOWN * traffic_level as f64);
    if is_peak_hour(hour) {
        minutes * PEAK_SLOWDOWN
    } else {
        minutes
    }
}

/// Compute the quote for a validated request.
pub fn quote(request: &RideQuoteRequest, market: &MarketConditions) -> RideQuoteResponse {
    let trip_km = haversine_km(
        request.pickup_lat,
        request.pickup_lng,
        request.drop_lat,
        request.drop_lng,
    );
    let peak = is_peak_hour(market.hour);
    let traffic = request.traffic_level as f64;

    let eta = travel_minutes(trip_km + market.pickup_km, request.traffic_level, market.hour);

    let signal = 1.0 + traffic + if peak { 1.0 } else { 0.0 };
    let demand = signal / market.supply.max(1) as f64;
    let surge = surge_multiplier(demand);
    let cost = (BASE_FARE + PER_KM * trip_km + PER_MIN * eta) * surge;

    RideQuoteResponse {
        eta: round2(eta),
        cost: round2(cost),
        demand: round2(demand),
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
