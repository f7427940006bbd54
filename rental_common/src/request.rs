//! Rental request payload handed to the pricing engine.
use serde::{Deserialize, Serialize};

use crate::calendar::RentalDate;
use crate::vehicle::VehicleCategory;

/// A single quote request. Transient: built per call and dropped afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentalRequest<D> {
    /// Day the vehicle is collected.
    pub pickup: D,
    /// Day the vehicle is returned. May precede `pickup`.
    pub dropoff: D,
    /// Free-form vehicle type, resolved with [`VehicleCategory::resolve`].
    pub vehicle_type: String,
    /// Driver's age in whole years.
    pub driver_age: u32,
    /// Years the driver has held a license. Fractional values are allowed.
    pub license_years: f64,
}

impl<D: RentalDate> RentalRequest<D> {
    /// Creates a new request.
    pub fn new(
        pickup: D,
        dropoff: D,
        vehicle_type: &str,
        driver_age: u32,
        license_years: f64,
    ) -> Self {
        RentalRequest {
            pickup,
            dropoff,
            vehicle_type: String::from(vehicle_type),
            driver_age,
            license_years,
        }
    }

    /// Category the vehicle type resolves to.
    pub fn category(&self) -> VehicleCategory {
        VehicleCategory::resolve(&self.vehicle_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn decodes_from_json() {
        let json = r#"{
            "pickup": "2025-07-01",
            "dropoff": "2025-06-28",
            "vehicle_type": "Cabrio",
            "driver_age": 34,
            "license_years": 1.5
        }"#;
        let request: RentalRequest<NaiveDate> = serde_json::from_str(json).unwrap();
        assert_eq!(request.pickup, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(request.dropoff, NaiveDate::from_ymd_opt(2025, 6, 28).unwrap());
        assert_eq!(request.category(), VehicleCategory::Cabrio);
        assert_eq!(request.license_years, 1.5);
    }

    #[test]
    fn json_round_trip_keeps_free_form_type() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let request = RentalRequest::new(day, day, "Truck", 30, 5.0);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""vehicle_type":"Truck""#));
        let decoded: RentalRequest<NaiveDate> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
        assert_eq!(decoded.category(), VehicleCategory::Unknown);
    }
}
