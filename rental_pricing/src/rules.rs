//! Pricing rule set.
//!
//! Every threshold, month bound, multiplier and fee used by the pricing stages
//! lives in one immutable `PricingRules` value. `PricingRules::default()` is the
//! production tariff; alternative tariffs can be loaded from JSON, where any
//! omitted field keeps its default.

use std::io::Read;

use rental_common::{RentalError, Result};
use serde::{Deserialize, Serialize};

/// Thresholds and rates applied by the pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    /// Absolute minimum driver age.
    pub min_driver_age: u32,
    /// Drivers at or below this age may only rent Compact vehicles.
    pub young_driver_max_age: u32,
    /// Racer drivers at or below this age pay the racer surcharge in high season.
    pub racer_young_max_age: u32,

    /// First high-season month, zero-based, inclusive.
    pub high_season_start_month: u32,
    /// Last high-season month, zero-based, inclusive.
    pub high_season_end_month: u32,

    /// Fractional increase applied to the per-day price in high season.
    pub high_season_price_increase: f64,
    /// Multiplier for young Racer drivers in high season.
    pub racer_young_high_season_multiplier: f64,

    /// Minimum license tenure in years.
    pub license_min_years: f64,
    /// Below this tenure the per-day price is multiplied by `license_price_multiplier`.
    pub license_price_increase_years: f64,
    /// Below this tenure a flat fee is added to the per-day price in high season.
    pub license_high_season_fee_years: f64,
    /// Inexperienced-driver multiplier.
    pub license_price_multiplier: f64,
    /// Flat high-season fee for inexperienced drivers.
    pub license_high_season_extra_fee: f64,

    /// Rentals longer than this many days may be discounted.
    pub long_rental_min_days: u32,
    /// Fractional discount for long low-season rentals.
    pub long_rental_discount: f64,
}

impl Default for PricingRules {
    fn default() -> Self {
        PricingRules {
            min_driver_age: 18,
            young_driver_max_age: 21,
            racer_young_max_age: 25,
            high_season_start_month: 3,
            high_season_end_month: 9,
            high_season_price_increase: 0.15,
            racer_young_high_season_multiplier: 1.5,
            license_min_years: 1.0,
            license_price_increase_years: 2.0,
            license_high_season_fee_years: 3.0,
            license_price_multiplier: 1.3,
            license_high_season_extra_fee: 15.0,
            long_rental_min_days: 10,
            long_rental_discount: 0.10,
        }
    }
}

impl PricingRules {
    /// Parse a rule set from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rules: PricingRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Read a rule set from any JSON source and validate it.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let rules: PricingRules = serde_json::from_reader(reader)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check that the rule set is internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.high_season_end_month > 11 {
            return Err(RentalError::InvalidRules(format!(
                "high_season_end_month must be 0..=11, got {}",
                self.high_season_end_month
            )));
        }
        if self.high_season_start_month > self.high_season_end_month {
            return Err(RentalError::InvalidRules(format!(
                "high season starts after it ends ({} > {})",
                self.high_season_start_month, self.high_season_end_month
            )));
        }

        let rates = [
            ("high_season_price_increase", self.high_season_price_increase),
            (
                "racer_young_high_season_multiplier",
                self.racer_young_high_season_multiplier,
            ),
            ("license_min_years", self.license_min_years),
            ("license_price_increase_years", self.license_price_increase_years),
            ("license_high_season_fee_years", self.license_high_season_fee_years),
            ("license_price_multiplier", self.license_price_multiplier),
            ("license_high_season_extra_fee", self.license_high_season_extra_fee),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(RentalError::InvalidRules(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.long_rental_discount) {
            return Err(RentalError::InvalidRules(format!(
                "long_rental_discount must be within [0, 1], got {}",
                self.long_rental_discount
            )));
        }
        Ok(())
    }

    /// `true` when the zero-based `month0` lies in the high-season window.
    pub fn is_high_season_month(&self, month0: u32) -> bool {
        (self.high_season_start_month..=self.high_season_end_month).contains(&month0)
    }
}
