//! Ride quote HTTP service.
//!
//! Prices rides from pickup/drop coordinates and a traffic level, using the in-memory
//! fleet registry for supply and pickup distance. The binary in `main.rs` only wires
//! logging, arguments and the listener; everything routable lives here so tests can
//! drive it directly.
#![warn(missing_docs)]
pub mod args;
pub mod error;
pub mod model;
pub mod routes;

pub use routes::{AppState, app_router};
