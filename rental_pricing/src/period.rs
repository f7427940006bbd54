//! Season classification and rental length.

use rental_common::calendar::whole_days_between;
use rental_common::{RentalDate, Season};

use crate::rules::PricingRules;

/// Label the rental High or Low season.
///
/// Only the month of each end is inspected, regardless of year. A rental from
/// December into April is High season because the dropoff month is in range,
/// even though the days in between are not.
pub fn classify_season<D: RentalDate>(rules: &PricingRules, pickup: &D, dropoff: &D) -> Season {
    if rules.is_high_season_month(pickup.month0()) || rules.is_high_season_month(dropoff.month0())
    {
        Season::High
    } else {
        Season::Low
    }
}

/// Inclusive rental length in days. A same-day rental is one day.
pub fn rental_days<D: RentalDate>(pickup: &D, dropoff: &D) -> u32 {
    whole_days_between(pickup, dropoff) + 1
}
