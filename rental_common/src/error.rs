//! Error types shared by the pricing crates.
//!
//! The `RentalError` enum unifies the three driver-eligibility rejections with
//! the failures that can occur while loading a rule set, allowing crates to
//! propagate a single error type.
use thiserror::Error;

use crate::vehicle::VehicleCategory;

/// Unified error type for quoting.
#[derive(Error, Debug)]
pub enum RentalError {
    /// Driver is below the absolute minimum age.
    #[error("Driver too young - cannot quote the price (age {age}, minimum {min_age})")]
    DriverTooYoung {
        /// Age supplied with the request.
        age: u32,
        /// Minimum age allowed by the rule set.
        min_age: u32,
    },

    /// Young driver asked for a category other than Compact.
    #[error("Drivers {max_age} y/o or less can only rent Compact vehicles (requested {category})")]
    CategoryRestricted {
        /// Resolved category of the request.
        category: VehicleCategory,
        /// Upper bound of the young-driver band.
        max_age: u32,
    },

    /// Driver's license has not been held long enough.
    #[error("Driver's license held for less than one year (held {years}, minimum {min_years})")]
    LicenseTooNew {
        /// License tenure supplied with the request.
        years: f64,
        /// Minimum tenure allowed by the rule set.
        min_years: f64,
    },

    /// Rule set failed validation; contains a short description of the bad field.
    #[error("Invalid pricing rules: {0}")]
    InvalidRules(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RentalError {
    /// Returns `true` when the error rejects the driver rather than signalling a fault.
    pub fn is_eligibility(&self) -> bool {
        matches!(
            self,
            RentalError::DriverTooYoung { .. }
                | RentalError::CategoryRestricted { .. }
                | RentalError::LicenseTooNew { .. }
        )
    }
}
