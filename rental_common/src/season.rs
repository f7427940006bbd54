//! Season label derived from the rental dates.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Pricing season. Derived per request, never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, Hash, Eq, PartialEq)]
pub enum Season {
    /// Either end of the rental falls in the high-season months.
    High,
    /// Everything else.
    Low,
}

impl Season {
    /// Shorthand for `self == Season::High`.
    pub fn is_high(self) -> bool {
        self == Season::High
    }
}
