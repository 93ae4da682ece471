//! Base unit definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fundamental dimension with a canonical abbreviation.
///
/// Stored magnitudes are always denominated in these units. New variants
/// may be added, but existing abbreviations must never change: callers
/// rely on them as a stable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseUnit {
    /// Length, abbreviated "m"
    Meter,
    /// Mass, abbreviated "g"
    Gram,
}

impl BaseUnit {
    /// Every known base unit, in declaration order.
    pub const ALL: [BaseUnit; 2] = [BaseUnit::Meter, BaseUnit::Gram];

    /// The canonical abbreviation ("m", "g").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            BaseUnit::Meter => "m",
            BaseUnit::Gram => "g",
        }
    }

    /// Human-readable unit name ("meter", "gram").
    pub fn name(&self) -> &'static str {
        match self {
            BaseUnit::Meter => "meter",
            BaseUnit::Gram => "gram",
        }
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviations_are_stable() {
        assert_eq!(BaseUnit::Meter.abbreviation(), "m");
        assert_eq!(BaseUnit::Gram.abbreviation(), "g");
    }

    #[test]
    fn test_all_lists_every_variant() {
        assert!(BaseUnit::ALL.contains(&BaseUnit::Meter));
        assert!(BaseUnit::ALL.contains(&BaseUnit::Gram));
        assert_eq!(BaseUnit::ALL.len(), 2);
    }

    #[test]
    fn test_display_prints_abbreviation() {
        assert_eq!(format!("{}", BaseUnit::Meter), "m");
        assert_eq!(format!("{}", BaseUnit::Gram), "g");
    }
}
