//!
//! Common types shared by the rental pricing crates.
//!
//! This crate aggregates:
//! - `error` — unified error type `RentalError` covering rejected drivers and bad rule sets.
//! - `result` — handy `Result<T, RentalError>` alias.
//! - `vehicle` — vehicle categories and the free-form name resolver.
//! - `season` — the High/Low season label.
//! - `calendar` — the minimal date capability pricing needs (month, instant).
//! - `request` — the rental request value handed to the pricing engine.
#![warn(missing_docs)]
pub mod calendar;
pub mod error;
pub mod request;
pub mod result;
pub mod season;
pub mod vehicle;

pub use calendar::RentalDate;
pub use error::RentalError;
pub use request::RentalRequest;
pub use result::Result;
pub use season::Season;
pub use vehicle::VehicleCategory;
