//! In-memory fleet registry.
//!
//! Vehicles are keyed by `vehicle_id`; an update replaces the previous state wholesale.
//! The registry is not synchronized; the server wraps it in an `RwLock`.
use std::collections::HashMap;

use crate::model::geo::haversine_km;
use crate::model::vehicle::Vehicle;

/// Tracks the last reported state of every vehicle.
#[derive(Debug, Default)]
pub struct Fleet {
    vehicles: HashMap<String, Vehicle>,
}

impl Fleet {
    /// Create an empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a vehicle, returning the stored copy.
    pub fn upsert(&mut self, vehicle: Vehicle) -> &Vehicle {
        self.vehicles
            .entry(vehicle.vehicle_id.clone())
            .insert_entry(vehicle)
            .into_mut()
    }

    /// Available vehicles with their distance in kilometres to `(lat, lng)`, nearest first.
    pub fn available_by_distance(&self, lat: f64, lng: f64) -> Vec<(&Vehicle, f64)> {
        let mut candidates: Vec<_> = self
            .vehicles
            .values()
            .filter(|v| v.available)
            .map(|v| (v, haversine_km(lat, lng, v.latitude, v.longitude)))
            .collect();
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
        candidates
    }
}
