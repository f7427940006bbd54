//! Vehicle categories and the resolver that maps free-form names onto them.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Set of vehicle categories known to the pricing rules.
///
/// `Unknown` is the catch-all for any name that is not one of the four rentable
/// classes. It is priced without category surcharges but is never `Compact`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, EnumIter, Hash, Eq, PartialEq,
)]
pub enum VehicleCategory {
    /// Small car; the only class open to young drivers.
    Compact,
    /// Battery-electric car.
    Electric,
    /// Convertible.
    Cabrio,
    /// Sports car; carries a surcharge for young drivers in high season.
    Racer,
    /// Anything else.
    Unknown,
}

impl VehicleCategory {
    /// Resolve a free-form vehicle type.
    ///
    /// Matching is exact and case-sensitive: `"compact"` resolves to `Unknown`.
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or(VehicleCategory::Unknown)
    }

    /// `true` for every category except `Unknown`.
    pub fn is_known(self) -> bool {
        self != VehicleCategory::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn display_and_resolve_round_trip_for_known_classes() {
        for category in VehicleCategory::iter().filter(|c| c.is_known()) {
            assert_eq!(VehicleCategory::resolve(&category.to_string()), category);
        }
        assert_eq!(VehicleCategory::iter().filter(|c| c.is_known()).count(), 4);
    }

    #[test]
    fn resolves_the_four_named_classes() {
        assert_eq!(VehicleCategory::resolve("Compact"), VehicleCategory::Compact);
        assert_eq!(VehicleCategory::resolve("Electric"), VehicleCategory::Electric);
        assert_eq!(VehicleCategory::resolve("Cabrio"), VehicleCategory::Cabrio);
        assert_eq!(VehicleCategory::resolve("Racer"), VehicleCategory::Racer);
    }

    #[test]
    fn anything_else_is_unknown() {
        for name in ["Truck", "compact", "RACER", " Compact", ""] {
            let category = VehicleCategory::resolve(name);
            assert_eq!(category, VehicleCategory::Unknown, "{name:?}");
            assert!(!category.is_known());
        }
    }

    #[test]
    fn display_matches_input_names() {
        assert_eq!(VehicleCategory::Cabrio.to_string(), "Cabrio");
    }
}
