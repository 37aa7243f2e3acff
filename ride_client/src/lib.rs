//! Ride Quote Client — reads five form inputs, posts them to the ride quote service and
//! renders the returned ETA, cost and demand.
//!
//! The flow is strictly linear: form values → request → one POST → render. Building the
//! request is pure (see `ride_common::form`); the network call lives in [`sender`]; the
//! display is any `std::io::Write`.
#![warn(missing_docs)]
pub mod args;
pub mod sender;

use std::io::Write;

use log::{info, warn};
use ride_common::render::render_quote;
use ride_common::{FormValues, Result, RideQuoteResponse};

pub use sender::QuoteSender;

/// How form input is turned into a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitMode {
    /// Reject bad input with a field-level error before anything is sent.
    #[default]
    Validated,
    /// Send whatever parses; bad numbers go out as `null`.
    Unchecked,
}

/// Submit one quote request and write the rendered quote to `display`.
///
/// `display` is written only after a quote was decoded successfully.
pub async fn submit<W: Write>(
    sender: &QuoteSender,
    form: &FormValues,
    mode: SubmitMode,
    display: &mut W,
) -> Result<RideQuoteResponse> {
    let quote = match mode {
        SubmitMode::Validated => {
            let request = form.validate()?;
            sender.send_quote(&request).await?
        }
        SubmitMode::Unchecked => {
            let request = form.to_unchecked();
            warn!("Sending unvalidated input: {:?}", request);
            sender.send_quote(&request).await?
        }
    };
    info!("Quote received: {:?}", quote);
    display.write_all(render_quote(&quote).as_bytes())?;
    display.flush()?;
    Ok(quote)
}
