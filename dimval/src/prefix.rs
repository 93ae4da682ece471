//! Magnitude prefixes applied to base-unit abbreviations

use serde::{Deserialize, Serialize};

/// A magnitude multiplier written as a prefix to a base-unit
/// abbreviation: "Kg" is kilo-gram, "mm" is milli-meter.
///
/// Like [`BaseUnit`](crate::BaseUnit), the set may grow (deci-, centi-,
/// mega-, ...) but existing abbreviations and multipliers never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitPrefix {
    /// "K", x1000
    Kilo,
    /// "m", x0.001
    Milli,
}

impl UnitPrefix {
    /// Every known prefix, in declaration order.
    pub const ALL: [UnitPrefix; 2] = [UnitPrefix::Kilo, UnitPrefix::Milli];

    /// The token written before the unit abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            UnitPrefix::Kilo => "K",
            UnitPrefix::Milli => "m",
        }
    }

    /// Scale factor relative to the base unit.
    pub fn multiplier(&self) -> f64 {
        match self {
            UnitPrefix::Kilo => 1000.0,
            UnitPrefix::Milli => 0.001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviations_are_stable() {
        assert_eq!(UnitPrefix::Kilo.abbreviation(), "K");
        assert_eq!(UnitPrefix::Milli.abbreviation(), "m");
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(UnitPrefix::Kilo.multiplier(), 1000.0);
        assert_eq!(UnitPrefix::Milli.multiplier(), 0.001);
    }
}
