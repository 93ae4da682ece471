//! Quantity type - a magnitude with an associated base unit

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Neg};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parse::{parse_quantity_string, resolve_token};
use crate::{BaseUnit, DimvalError};

/// A physical quantity: a magnitude denominated in the base unit of its
/// dimension.
///
/// The stored magnitude is always base-unit-normalized: constructing
/// `1.0 Kg` stores `1000.0` grams. Values are immutable; every operation
/// returns a new `Quantity`.
///
/// Binary operations require both operands to share a base unit. Meters
/// and grams never mix, and there is no coercion between dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Quantity {
    magnitude: f64,
    unit: BaseUnit,
}

impl Quantity {
    /// Create a quantity from a magnitude already denominated in the
    /// base unit. No scaling is applied.
    pub fn new(magnitude: f64, unit: BaseUnit) -> Self {
        Quantity { magnitude, unit }
    }

    /// Create a quantity from a magnitude and a unit token ("m", "Kg",
    /// "mm", ...). The magnitude is scaled by the token's prefix, if
    /// any: `from_token(1.0, "Kg")` stores 1000.0 grams.
    pub fn from_token(magnitude: f64, token: &str) -> Result<Self, DimvalError> {
        let (unit, factor) = resolve_token(token)?;
        Ok(Quantity::new(magnitude * factor, unit))
    }

    /// The magnitude, in base units.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The base unit this quantity is denominated in.
    pub fn unit(&self) -> BaseUnit {
        self.unit
    }

    /// Add two quantities (base units must match).
    pub fn add(&self, other: &Quantity) -> Result<Quantity, DimvalError> {
        self.check_compatible(other)?;
        Ok(Quantity::new(self.magnitude + other.magnitude, self.unit))
    }

    /// Subtract another quantity (base units must match).
    pub fn sub(&self, other: &Quantity) -> Result<Quantity, DimvalError> {
        self.check_compatible(other)?;
        Ok(Quantity::new(self.magnitude - other.magnitude, self.unit))
    }

    /// The same quantity with its sign flipped.
    pub fn negated(&self) -> Quantity {
        Quantity::new(-self.magnitude, self.unit)
    }

    /// Multiply by a dimensionless scalar.
    pub fn scale(&self, factor: f64) -> Quantity {
        Quantity::new(self.magnitude * factor, self.unit)
    }

    /// Divide by a dimensionless scalar.
    ///
    /// Division by zero follows IEEE 754 (the magnitude becomes infinite
    /// or NaN); it is not an error.
    pub fn div_scalar(&self, divisor: f64) -> Quantity {
        Quantity::new(self.magnitude / divisor, self.unit)
    }

    /// The dimensionless ratio of two quantities (base units must
    /// match).
    pub fn ratio(&self, other: &Quantity) -> Result<f64, DimvalError> {
        self.check_compatible(other)?;
        Ok(self.magnitude / other.magnitude)
    }

    /// Order two quantities by magnitude (base units must match).
    ///
    /// `compare(3 g, 1 g)` is `Ordering::Greater`.
    pub fn compare(&self, other: &Quantity) -> Result<Ordering, DimvalError> {
        self.check_compatible(other)?;
        Ok(self.magnitude.total_cmp(&other.magnitude))
    }

    fn check_compatible(&self, other: &Quantity) -> Result<(), DimvalError> {
        if self.unit != other.unit {
            return Err(DimvalError::IncompatibleUnits {
                left: self.unit,
                right: other.unit,
            });
        }
        Ok(())
    }
}

impl FromStr for Quantity {
    type Err = DimvalError;

    /// Parse a quantity from a "<magnitude> <unit>" string ("1 Kg",
    /// "3 mm", "100 g").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (magnitude, unit) = parse_quantity_string(s)?;
        Ok(Quantity::new(magnitude, unit))
    }
}

impl PartialEq for Quantity {
    /// Mismatched base units compare unequal rather than failing.
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.magnitude == other.magnitude
    }
}

impl PartialOrd for Quantity {
    /// `None` when the base units differ, mirroring the `PartialEq`
    /// false-case.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit != other.unit {
            return None;
        }
        self.magnitude.partial_cmp(&other.magnitude)
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        self.negated()
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, factor: f64) -> Quantity {
        self.scale(factor)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, divisor: f64) -> Quantity {
        self.div_scalar(divisor)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value: {} dimension: {}", self.magnitude, self.unit.name())
    }
}
