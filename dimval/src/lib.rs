//! Dimval - Unit-Tagged Physical Quantities
//!
//! Models values like "6 meters" or "3 kilograms". Every quantity is
//! normalized to the base unit of its dimension at construction time
//! (1.0 Kg is stored as 1000.0 grams), and arithmetic between two
//! quantities is only permitted when their base units match.
//!
//! Base units:
//! - Length (m)
//! - Mass (g)
//!
//! Prefixes:
//! - K (kilo, x1000)
//! - m (milli, x0.001)
//!
//! Both sets may grow, but existing abbreviations are a stability
//! contract and never change.

mod error;
mod parse;
mod prefix;
mod quantity;
mod unit;

pub use error::DimvalError;
pub use parse::{parse_quantity_string, resolve_token};
pub use prefix::UnitPrefix;
pub use quantity::Quantity;
pub use unit::BaseUnit;
