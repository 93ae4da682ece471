//! Error type for quantity construction and arithmetic
//!
//! All failures surface synchronously to the caller as the direct result
//! of the failing call. Nothing is logged, swallowed, or retried inside
//! the library.

use thiserror::Error;

use crate::BaseUnit;

/// Error type for quantity operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimvalError {
    /// The token is neither a bare base-unit abbreviation nor a valid
    /// prefixed one.
    #[error("Unknown unit token: {0}")]
    InvalidUnitToken(String),

    /// The magnitude portion of a quantity string is not a parseable
    /// floating-point literal.
    #[error("Invalid numeric literal: {0}")]
    InvalidNumericLiteral(String),

    /// A quantity string did not split into exactly a magnitude and a
    /// unit token.
    #[error("Malformed quantity string (expected '<magnitude> <unit>'): {0:?}")]
    MalformedInput(String),

    /// A binary operation received operands with different base units.
    #[error("Incompatible units: {left} and {right}")]
    IncompatibleUnits { left: BaseUnit, right: BaseUnit },
}
