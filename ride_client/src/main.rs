//! Ride Quote Client — asks the quote service for a ride quote and prints it to stdout.
//!
//! Usage example (CLI):
//! ```bash
//! ride_client --pickup-lat 12.9716 --pickup-lng 77.5946 \
//!     --drop-lat 12.9352 --drop-lng 77.6245 --traffic-level 2
//! ```
//!
//! The service address defaults to `http://127.0.0.1:8000` and can be changed with
//! `--server` or `RIDE_QUOTE_SERVER`.
use std::io;
use std::time::Duration;

use clap::Parser;
use log::error;
use ride_client::args::Args;
use ride_client::{QuoteSender, SubmitMode, submit};
use ride_common::RideError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RideError> {
    init_logger();
    let args = Args::parse();

    let sender = QuoteSender::new(&args.server, Duration::from_secs(args.timeout_secs))?;
    let mode = if args.no_validate {
        SubmitMode::Unchecked
    } else {
        SubmitMode::Validated
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = submit(&sender, &args.form_values(), mode, &mut stdout).await {
        error!("Quote request failed: {}", e);
        return Err(e);
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
