//! Domain models and utilities for the ride quote server.
//!
//! This module groups the core types used by the HTTP handlers:
//! - `geo` — great-circle distance between coordinates.
//! - `vehicle` — fleet vehicle payload and category.
//! - `fleet` — in-memory registry of vehicles and their availability.
//! - `matching` — ranking of available vehicles for a ride.
//! - `pricing` — ETA, demand and fare computation for a quote.

pub mod fleet;
pub mod geo;
pub mod matching;
pub mod pricing;
pub mod vehicle;
