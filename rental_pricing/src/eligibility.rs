//! Driver eligibility checks.
//!
//! Rules are checked in a fixed order and the first failure wins: minimum age,
//! then the young-driver category restriction, then license tenure.

use rental_common::{RentalError, Result, VehicleCategory};

use crate::rules::PricingRules;

/// Reject drivers the rule set does not allow to rent `category`.
pub fn validate_driver(
    rules: &PricingRules,
    age: u32,
    category: VehicleCategory,
    license_years: f64,
) -> Result<()> {
    if age < rules.min_driver_age {
        return Err(RentalError::DriverTooYoung {
            age,
            min_age: rules.min_driver_age,
        });
    }

    if age <= rules.young_driver_max_age && category != VehicleCategory::Compact {
        return Err(RentalError::CategoryRestricted {
            category,
            max_age: rules.young_driver_max_age,
        });
    }

    if license_years.is_nan() || license_years < rules.license_min_years {
        return Err(RentalError::LicenseTooNew {
            years: license_years,
            min_years: rules.license_min_years,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn check(age: u32, category: VehicleCategory, years: f64) -> Result<()> {
        validate_driver(&PricingRules::default(), age, category, years)
    }

    #[test]
    fn under_eighteen_is_always_too_young() {
        for age in 0..18 {
            let err = check(age, VehicleCategory::Compact, 10.0).unwrap_err();
            assert!(matches!(err, RentalError::DriverTooYoung { .. }), "age {age}");
        }
        // Age is checked before the other two rules.
        let err = check(17, VehicleCategory::Racer, 0.0).unwrap_err();
        assert!(matches!(err, RentalError::DriverTooYoung { age: 17, min_age: 18 }));
    }

    #[test]
    fn young_drivers_are_limited_to_compact() {
        for age in 18..=21 {
            assert!(check(age, VehicleCategory::Compact, 5.0).is_ok());
            for category in VehicleCategory::iter().filter(|c| *c != VehicleCategory::Compact) {
                let err = check(age, category, 5.0).unwrap_err();
                assert!(matches!(err, RentalError::CategoryRestricted { .. }), "{age} {category}");
            }
        }
        assert!(check(22, VehicleCategory::Racer, 5.0).is_ok());
    }

    #[test]
    fn category_restriction_wins_over_license() {
        let err = check(20, VehicleCategory::Cabrio, 0.2).unwrap_err();
        assert!(matches!(err, RentalError::CategoryRestricted { .. }));
    }

    #[test]
    fn license_under_one_year_is_rejected() {
        for years in [0.0, 0.5, 0.99] {
            let err = check(30, VehicleCategory::Compact, years).unwrap_err();
            assert!(matches!(err, RentalError::LicenseTooNew { .. }), "{years}");
        }
        assert!(check(30, VehicleCategory::Compact, 1.0).is_ok());
    }

    #[test]
    fn non_finite_or_negative_tenure_is_rejected() {
        for years in [f64::NAN, -1.0, f64::NEG_INFINITY] {
            assert!(matches!(
                check(30, VehicleCategory::Compact, years),
                Err(RentalError::LicenseTooNew { .. })
            ));
        }
    }
}
