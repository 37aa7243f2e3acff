//! Command-line arguments for the Ride Quote Client.
//!
//! This module defines the CLI interface using `clap`. Coordinates are taken as raw
//! text, the same way a form field holds them, so validation stays in one place.
use clap::Parser;
use ride_common::FormValues;
use ride_common::net::DEFAULT_SERVER;

use crate::sender::REQUEST_TIMEOUT;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Request a ride quote and print ETA, cost and demand", long_about = None)]
pub struct Args {
    /// Base URL of the ride quote service.
    #[clap(long, env = "RIDE_QUOTE_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,

    /// Pickup latitude in degrees.
    #[clap(long, allow_hyphen_values = true)]
    pub pickup_lat: String,

    /// Pickup longitude in degrees.
    #[clap(long, allow_hyphen_values = true)]
    pub pickup_lng: String,

    /// Drop latitude in degrees.
    #[clap(long, allow_hyphen_values = true)]
    pub drop_lat: String,

    /// Drop longitude in degrees.
    #[clap(long, allow_hyphen_values = true)]
    pub drop_lng: String,

    /// Traffic level from 0 (free-flowing) to 3 (gridlock).
    #[clap(long, default_value = "1", allow_hyphen_values = true)]
    pub traffic_level: String,

    /// Request timeout in seconds.
    #[clap(long, default_value_t = REQUEST_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Send the input as typed; unparsable numbers go out as null.
    #[clap(long)]
    pub no_validate: bool,
}

impl Args {
    /// The five quote inputs as form values.
    pub fn form_values(&self) -> FormValues {
        FormValues::new(
            &self.pickup_lat,
            &self.pickup_lng,
            &self.drop_lat,
            &self.drop_lng,
            &self.traffic_level,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_coordinates_and_defaults() {
        let args = Args::try_parse_from([
            "ride_client",
            "--pickup-lat",
            "-33.8688",
            "--pickup-lng",
            "151.2093",
            "--drop-lat",
            "-33.8568",
            "--drop-lng",
            "151.2153",
        ])
        .unwrap();
        assert_eq!(args.traffic_level, "1");
        assert_eq!(args.timeout_secs, REQUEST_TIMEOUT.as_secs());
        assert_eq!(args.timeout_secs, 30);
        assert!(!args.no_validate);
        let form = args.form_values();
        assert_eq!(form.pickup_lat, "-33.8688");
        assert_eq!(form.drop_lng, "151.2153");
    }

    #[test]
    fn coordinates_are_required() {
        assert!(Args::try_parse_from(["ride_client", "--pickup-lat", "1"]).is_err());
    }
}
