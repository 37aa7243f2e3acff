//! Ride quote HTTP server.
//!
//! Usage example (CLI):
//! ```bash
//! ride_server --bind 127.0.0.1:8000
//! ```
use clap::Parser;
use log::info;
use ride_server::args::Args;
use ride_server::{AppState, app_router};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_logger();
    let args = Args::parse();

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Ride quote server listening on {}", listener.local_addr()?);

    axum::serve(listener, app_router(AppState::new()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Ctrl+C received. Shutting down server...");
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
