//!
//! Common types and utilities shared by the ride quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `RideError` used across the workspace.
//! - `result` — handy `Result<T, RideError>` alias.
//! - `form` — raw form values and their field-level validation.
//! - `quote` — the request/response pair exchanged over HTTP.
//! - `render` — text rendering of a quote for display.
//! - `net` — endpoint constants and URL helpers.
#![warn(missing_docs)]
pub mod error;
pub mod form;
pub mod net;
pub mod quote;
pub mod render;
pub mod result;

pub use error::RideError;
pub use form::{FieldError, FieldErrorReason, FormField, FormValues};
pub use quote::{RideQuoteRequest, RideQuoteResponse, UncheckedQuoteRequest};
pub use result::Result;
