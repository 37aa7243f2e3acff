//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `RideError`, so functions can simply return `Result<T>`.
use crate::error::RideError;

/// Workspace-wide `Result` alias with `RideError` as the default error.
pub type Result<T, E = RideError> = std::result::Result<T, E>;
