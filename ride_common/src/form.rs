//! Raw form input and its conversion into a quote request.
//!
//! `FormValues` holds the five fields exactly as the user typed them. Two
//! conversions are offered:
//!
//! - [`FormValues::validate`] checks every field and either yields a
//!   [`RideQuoteRequest`] or the first [`FieldError`] in form order.
//! - [`FormValues::to_unchecked`] never fails: each field is read up to the end
//!   of its leading number, the way a browser form's `parseFloat`/`parseInt`
//!   would, and fields with no leading number become the not-a-number sentinel,
//!   sent as JSON `null`.
//!
//! Both are pure; no I/O happens here.
use strum_macros::Display;
use thiserror::Error;

use crate::quote::{RideQuoteRequest, UncheckedQuoteRequest};

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
/// Lowest accepted traffic level.
pub const MIN_TRAFFIC_LEVEL: i32 = 0;
/// Highest accepted traffic level.
pub const MAX_TRAFFIC_LEVEL: i32 = 3;

/// One of the five form inputs, named after its JSON key.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum FormField {
    PickupLat,
    PickupLng,
    DropLat,
    DropLng,
    TrafficLevel,
}

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldErrorReason {
    /// Nothing was entered.
    #[error("value is required")]
    Empty,
    /// The text is not a number of the expected kind.
    #[error("{0:?} is not a number")]
    NotANumber(String),
    /// The number parsed but is NaN or infinite.
    #[error("value must be a finite number")]
    NotFinite,
    /// The number is outside the accepted range.
    #[error("value must be between {min} and {max}")]
    OutOfRange {
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
}

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    /// The offending field.
    pub field: FormField,
    /// What is wrong with it.
    pub reason: FieldErrorReason,
}

impl FieldError {
    /// Shorthand constructor.
    pub fn new(field: FormField, reason: FieldErrorReason) -> Self {
        Self { field, reason }
    }
}

/// Raw, untrimmed text of the five form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    /// Pickup latitude as typed.
    pub pickup_lat: String,
    /// Pickup longitude as typed.
    pub pickup_lng: String,
    /// Drop latitude as typed.
    pub drop_lat: String,
    /// Drop longitude as typed.
    pub drop_lng: String,
    /// Traffic level as typed.
    pub traffic_level: String,
}

impl FormValues {
    /// Build form values from anything string-like.
    pub fn new(
        pickup_lat: impl Into<String>,
        pickup_lng: impl Into<String>,
        drop_lat: impl Into<String>,
        drop_lng: impl Into<String>,
        traffic_level: impl Into<String>,
    ) -> Self {
        Self {
            pickup_lat: pickup_lat.into(),
            pickup_lng: pickup_lng.into(),
            drop_lat: drop_lat.into(),
            drop_lng: drop_lng.into(),
            traffic_level: traffic_level.into(),
        }
    }

    /// Raw text of a single field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::PickupLat => &self.pickup_lat,
            FormField::PickupLng => &self.pickup_lng,
            FormField::DropLat => &self.drop_lat,
            FormField::DropLng => &self.drop_lng,
            FormField::TrafficLevel => &self.traffic_level,
        }
    }

    /// Parse and range-check every field, stopping at the first failure.
    pub fn validate(&self) -> Result<RideQuoteRequest, FieldError> {
        Ok(RideQuoteRequest {
            pickup_lat: parse_coordinate(self, FormField::PickupLat, LATITUDE_RANGE)?,
            pickup_lng: parse_coordinate(self, FormField::PickupLng, LONGITUDE_RANGE)?,
            drop_lat: parse_coordinate(self, FormField::DropLat, LATITUDE_RANGE)?,
            drop_lng: parse_coordinate(self, FormField::DropLng, LONGITUDE_RANGE)?,
            traffic_level: parse_traffic_level(self.get(FormField::TrafficLevel))?,
        })
    }

    /// Parse every field without validation.
    ///
    /// Each field is read up to the end of its leading number, so `"12.5abc"` is
    /// `12.5` and a traffic level of `"2.7"` is `2`. Float fields with no leading
    /// number become `NaN`; such a traffic level becomes `None`. Never panics.
    pub fn to_unchecked(&self) -> UncheckedQuoteRequest {
        UncheckedQuoteRequest {
            pickup_lat: leading_float(&self.pickup_lat),
            pickup_lng: leading_float(&self.pickup_lng),
            drop_lat: leading_float(&self.drop_lat),
            drop_lng: leading_float(&self.drop_lng),
            traffic_level: leading_int(&self.traffic_level),
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

/// Longest leading decimal number of `raw`, `NaN` when there is none.
fn leading_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let int_digits = count_digits(&bytes[sign..]);
    let mut end = sign + int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return match s[sign..].starts_with("Infinity") {
            true if s.starts_with('-') => f64::NEG_INFINITY,
            true => f64::INFINITY,
            false => f64::NAN,
        };
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1 + sign_len(&bytes[end + 1..]);
        let exp_digits = count_digits(&bytes[exp_start..]);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

/// Leading decimal integer of `raw`; `None` when there is none or it overflows.
fn leading_int(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

fn parse_coordinate(
    form: &FormValues,
    field: FormField,
    (min, max): (f64, f64),
) -> Result<f64, FieldError> {
    let raw = form.get(field).trim();
    if raw.is_empty() {
        return Err(FieldError::new(field, FieldErrorReason::Empty));
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| FieldError::new(field, FieldErrorReason::NotANumber(raw.to_string())))?;
    check_coordinate(field, value, (min, max))
}

/// Check that an already-parsed coordinate is finite and inside `min..=max`.
pub fn check_coordinate(
    field: FormField,
    value: f64,
    (min, max): (f64, f64),
) -> Result<f64, FieldError> {
    if !value.is_finite() {
        return Err(FieldError::new(field, FieldErrorReason::NotFinite));
    }
    if value < min || value > max {
        return Err(FieldError::new(field, FieldErrorReason::OutOfRange { min, max }));
    }
    Ok(value)
}

fn parse_traffic_level(raw: &str) -> Result<i32, FieldError> {
    let field = FormField::TrafficLevel;
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::new(field, FieldErrorReason::Empty));
    }
    let level: i32 = raw
        .parse()
        .map_err(|_| FieldError::new(field, FieldErrorReason::NotANumber(raw.to_string())))?;
    check_traffic_level(level)
}

/// Check that a traffic level lies in the accepted range.
pub fn check_traffic_level(level: i32) -> Result<i32, FieldError> {
    if !(MIN_TRAFFIC_LEVEL..=MAX_TRAFFIC_LEVEL).contains(&level) {
        return Err(FieldError::new(
            FormField::TrafficLevel,
            FieldErrorReason::OutOfRange {
                min: MIN_TRAFFIC_LEVEL as f64,
                max: MAX_TRAFFIC_LEVEL as f64,
            },
        ));
    }
    Ok(level)
}
