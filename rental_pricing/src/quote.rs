//! Quote data model and rendering helpers.
//!
//! A `Quote` is the result of a successful pricing run. It keeps the intermediate
//! values that produced the total so callers can show a breakdown, renders itself
//! as a `$<amount>` string through `Display`, and can be encoded to JSON.

use std::fmt;

use rental_common::{Result, Season, VehicleCategory};
use serde::{Deserialize, Serialize};

/// Currency marker prefixed to every rendered amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Priced rental.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Category the vehicle type resolved to.
    pub category: VehicleCategory,
    /// Season the rental was priced in.
    pub season: Season,
    /// Inclusive rental length.
    pub days: u32,
    /// Per-day price after license adjustments.
    pub daily_price: f64,
    /// Final total after the long-rental discount, unrounded.
    pub total: f64,
}

impl Quote {
    /// Encode the quote to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.total))
    }
}

/// Round half away from zero at the second decimal.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Render `amount` as `$1234.50`: two decimals, no grouping, locale independent.
pub fn format_amount(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, round_to_cents(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_two_decimals() {
        assert_eq!(format_amount(30.0), "$30.00");
        assert_eq!(format_amount(26.000000000000004), "$26.00");
        assert_eq!(format_amount(22.999999999999996), "$23.00");
        assert_eq!(format_amount(0.5), "$0.50");
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(format_amount(43.125), "$43.13");
        assert_eq!(format_amount(0.005), "$0.01");
    }

    #[test]
    fn large_amounts_have_no_separators() {
        assert_eq!(format_amount(1234567.891), "$1234567.89");
    }

    #[test]
    fn display_renders_total() {
        let quote = Quote {
            category: VehicleCategory::Compact,
            season: Season::Low,
            days: 15,
            daily_price: 30.0,
            total: 405.0,
        };
        assert_eq!(quote.to_string(), "$405.00");
    }

    #[test]
    fn json_contains_breakdown() {
        let quote = Quote {
            category: VehicleCategory::Racer,
            season: Season::High,
            days: 1,
            daily_price: 43.125,
            total: 43.125,
        };
        let bytes = quote.to_json_bytes().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["category"], "Racer");
        assert_eq!(value["season"], "High");
        assert_eq!(value["days"], 1);
    }
}
