//! Car-rental quote engine.
//!
//! Turns a pickup/dropoff date pair, a vehicle type, the driver's age and license
//! tenure into a priced quote. Internally it wires together a handful of pure stages:
//!
//! - `eligibility` — rejects drivers the rule set does not allow (age, category, tenure).
//! - `period` — classifies the season and counts the inclusive rental days.
//! - `tariff` — base per-day price, license adjustment and long-rental discount.
//! - `quote` — the priced result and its `$<amount>` rendering.
//! - `rules` — the single `PricingRules` value every stage reads its numbers from.
//!
//! Stages run in a fixed order: resolve category, count days, classify season,
//! validate, price per day, adjust for license, multiply by days, discount, format.
//! A failed validation stops the run before any pricing math.
//!
//! Nothing is shared between calls; a `PricingEngine` can be used from many
//! threads at once.
#![warn(missing_docs)]
use log::{debug, info, warn};
use rental_common::{RentalDate, RentalRequest, Result, VehicleCategory};

pub mod eligibility;
pub mod period;
pub mod quote;
pub mod rules;
pub mod tariff;

pub use quote::Quote;
pub use rules::PricingRules;

/// Prices rentals against one validated rule set.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    rules: PricingRules,
}

impl PricingEngine {
    /// Create an engine for `rules`, rejecting inconsistent rule sets.
    pub fn new(rules: PricingRules) -> Result<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Price a request and return the full breakdown.
    pub fn quote<D: RentalDate>(&self, request: &RentalRequest<D>) -> Result<Quote> {
        let rules = &self.rules;

        let category = request.category();
        if !category.is_known() {
            warn!(
                "Unrecognised vehicle type {:?}, pricing as {}",
                request.vehicle_type,
                VehicleCategory::Unknown
            );
        }
        let days = period::rental_days(&request.pickup, &request.dropoff);
        let season = period::classify_season(rules, &request.pickup, &request.dropoff);
        debug!("Category={} Days={} Season={}", category, days, season);

        if let Err(e) = eligibility::validate_driver(
            rules,
            request.driver_age,
            category,
            request.license_years,
        ) {
            info!("Quote rejected: {}", e);
            return Err(e);
        }

        let mut daily_price =
            tariff::base_daily_price(rules, request.driver_age, season, category);
        daily_price =
            tariff::apply_license_rules(rules, daily_price, request.license_years, season);
        debug!("Daily price={:.4}", daily_price);

        let mut total = daily_price * f64::from(days);
        total = tariff::apply_rental_length_discount(rules, total, days, season);
        debug!("Total={:.4}", total);

        Ok(Quote {
            category,
            season,
            days,
            daily_price,
            total,
        })
    }

    /// Price a rental and render the total as `$<amount>`.
    pub fn price<D: RentalDate>(
        &self,
        pickup: D,
        dropoff: D,
        vehicle_type: &str,
        driver_age: u32,
        license_years: f64,
    ) -> Result<String> {
        let request = RentalRequest::new(pickup, dropoff, vehicle_type, driver_age, license_years);
        Ok(self.quote(&request)?.to_string())
    }
}

/// Price a rental with the default rule set.
///
/// ```
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(rental_pricing::price(day, day, "Compact", 30, 5.0).unwrap(), "$30.00");
/// ```
pub fn price<D: RentalDate>(
    pickup: D,
    dropoff: D,
    vehicle_type: &str,
    driver_age: u32,
    license_years: f64,
) -> Result<String> {
    PricingEngine::default().price(pickup, dropoff, vehicle_type, driver_age, license_years)
}
