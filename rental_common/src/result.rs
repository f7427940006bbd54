//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `RentalError`, so functions can simply return `Result<T>`.
use crate::error::RentalError;

/// Workspace-wide `Result` alias with `RentalError` as the default error.
pub type Result<T, E = RentalError> = std::result::Result<T, E>;
