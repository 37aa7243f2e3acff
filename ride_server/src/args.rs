//! Command-line arguments for the Ride Quote Server.
use std::net::SocketAddr;

use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Ride quote HTTP service", long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[clap(long, env = "RIDE_QUOTE_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,
}
