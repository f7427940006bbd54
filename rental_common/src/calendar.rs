//! Minimal date capability used by the pricing rules.
//!
//! Pricing only ever needs two things from a date: the calendar month it falls in
//! and a point on a common timeline so the distance between two dates can be
//! measured. `RentalDate` exposes exactly that, which keeps the rules independent
//! of any particular date representation. Implementations are provided for the
//! `chrono` date, naive date-time and zoned date-time types.
//!
//! Design notes:
//! - Months are zero-based (0 = January, 11 = December).
//! - Timestamps are seconds since the Unix epoch and may carry a sub-day part;
//!   the day-count rounding absorbs that drift.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Seconds in one calendar day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Capability required of pickup/dropoff values.
pub trait RentalDate {
    /// Calendar month, zero-based.
    fn month0(&self) -> u32;

    /// Seconds since the Unix epoch.
    fn timestamp_seconds(&self) -> f64;
}

impl RentalDate for NaiveDate {
    fn month0(&self) -> u32 {
        Datelike::month0(self)
    }

    fn timestamp_seconds(&self) -> f64 {
        self.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
    }
}

impl RentalDate for NaiveDateTime {
    fn month0(&self) -> u32 {
        Datelike::month0(self)
    }

    fn timestamp_seconds(&self) -> f64 {
        let utc = self.and_utc();
        utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_millis()) / 1000.0
    }
}

impl<Tz: TimeZone> RentalDate for DateTime<Tz> {
    fn month0(&self) -> u32 {
        Datelike::month0(self)
    }

    fn timestamp_seconds(&self) -> f64 {
        self.timestamp() as f64 + f64::from(self.timestamp_subsec_millis()) / 1000.0
    }
}

/// Whole days between two dates, rounded to the nearest day (ties away from zero).
///
/// The result is symmetric: the order of the arguments does not matter.
pub fn whole_days_between<A: RentalDate, B: RentalDate>(from: &A, to: &B) -> u32 {
    let delta = (to.timestamp_seconds() - from.timestamp_seconds()).abs();
    (delta / SECONDS_PER_DAY).round() as u32
}
