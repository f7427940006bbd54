//! Price arithmetic: per-day base rate, license adjustment and long-rental discount.
//!
//! All adjustments are plain `f64` arithmetic; rounding happens only once, when the
//! final total is rendered by [`crate::quote::Quote`].

use rental_common::{Season, VehicleCategory};

use crate::rules::PricingRules;

/// Per-day price before license adjustments.
///
/// The floor rate is the driver's age. Young Racer drivers pay the racer multiplier
/// in high season, and the seasonal increase is applied on top of it, so the two
/// compound rather than add.
pub fn base_daily_price(
    rules: &PricingRules,
    age: u32,
    season: Season,
    category: VehicleCategory,
) -> f64 {
    let mut price = f64::from(age);

    if category == VehicleCategory::Racer && age <= rules.racer_young_max_age && season.is_high() {
        price *= rules.racer_young_high_season_multiplier;
    }

    if season.is_high() {
        price *= 1.0 + rules.high_season_price_increase;
    }

    price
}

/// Adjust the per-day price for short license tenure.
///
/// The multiplier and the high-season fee are independent; a driver under two
/// years in high season pays both, multiplier first.
pub fn apply_license_rules(
    rules: &PricingRules,
    daily_price: f64,
    license_years: f64,
    season: Season,
) -> f64 {
    let mut adjusted = daily_price;

    if license_years < rules.license_price_increase_years {
        adjusted *= rules.license_price_multiplier;
    }

    if license_years < rules.license_high_season_fee_years && season.is_high() {
        adjusted += rules.license_high_season_extra_fee;
    }

    adjusted
}

/// Discount long low-season rentals. High season is never discounted.
pub fn apply_rental_length_discount(
    rules: &PricingRules,
    total: f64,
    days: u32,
    season: Season,
) -> f64 {
    if days > rules.long_rental_min_days && season == Season::Low {
        return total * (1.0 - rules.long_rental_discount);
    }
    total
}
