//! Fleet vehicle payload accepted by `/vehicles/update`.
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Vehicle size class.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum VehicleCategory {
    Mini,
    Sedan,
    #[serde(rename = "SUV")]
    #[strum(serialize = "SUV")]
    Suv,
}

/// Last reported state of one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique vehicle identifier.
    pub vehicle_id: String,
    /// Current latitude in degrees.
    pub latitude: f64,
    /// Current longitude in degrees.
    pub longitude: f64,
    /// Whether the vehicle can take a ride right now.
    pub available: bool,
    /// Size class.
    pub category: VehicleCategory,
}
