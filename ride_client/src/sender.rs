//! Sending quote requests to the ride quote service over HTTP.
//!
//! This module provides a small wrapper around a `reqwest::Client` bound to the quote
//! endpoint. One call to [`QuoteSender::send_quote`] is exactly one POST.
use std::time::Duration;

use log::{debug, info};
use reqwest::{Client, Url};
use ride_common::net::{QUOTE_PATH, endpoint};
use ride_common::{RideError, RideQuoteResponse};
use serde::Serialize;

/// Default HTTP request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to one quote endpoint.
pub struct QuoteSender {
    client: Client,
    endpoint: Url,
}

impl QuoteSender {
    /// Create a sender for the service at `server`, e.g. `http://127.0.0.1:8000`.
    pub fn new(server: &str, timeout: Duration) -> Result<Self, RideError> {
        let raw = endpoint(server, QUOTE_PATH);
        let endpoint = Url::parse(&raw).map_err(|e| RideError::Url(format!("{}: {}", raw, e)))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `request` as JSON and decode the quote from the response body.
    pub async fn send_quote<T: Serialize + ?Sized>(
        &self,
        request: &T,
    ) -> Result<RideQuoteResponse, RideError> {
        debug!("Request body: {}", serde_json::to_string(request)?);
        info!("Requesting quote from {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        debug!("Status: {}", status);
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Failed to read error body: {}", e);
                    String::new()
                }
            };
            return Err(RideError::Status { status, body });
        }

        let quote = response.json::<RideQuoteResponse>().await?;
        debug!("Result: {:?}", quote);
        Ok(quote)
    }
}
