//! Unit token and quantity string parsing
//!
//! Resolves textual tokens like "m", "Kg" or "mm" to a base unit and a
//! scale factor, and parses "<magnitude> <unit>" strings like "3.0 g".

use crate::{BaseUnit, DimvalError, UnitPrefix};

/// Resolve a unit token to a base unit and scale factor.
///
/// A token is either a bare base-unit abbreviation ("m" resolves to
/// meters with factor 1.0) or a prefix followed by a base-unit
/// abbreviation ("Kg" resolves to grams with factor 1000.0). Matching is
/// case-sensitive and exact.
pub fn resolve_token(token: &str) -> Result<(BaseUnit, f64), DimvalError> {
    if let Some(unit) = base_unit_for(token) {
        return Ok((unit, 1.0));
    }

    // A one-character token cannot carry a prefix: nothing would remain
    // for the unit abbreviation.
    if token.chars().count() > 1 {
        for prefix in UnitPrefix::ALL {
            if let Some(rest) = token.strip_prefix(prefix.abbreviation()) {
                if let Some(unit) = base_unit_for(rest) {
                    return Ok((unit, prefix.multiplier()));
                }
            }
        }
    }

    Err(DimvalError::InvalidUnitToken(token.to_string()))
}

/// Parse a quantity string like "1 Kg", "3 mm" or "100 g".
///
/// Returns the magnitude already normalized to the base unit, together
/// with that base unit. Anything other than exactly two
/// whitespace-separated parts is malformed.
pub fn parse_quantity_string(s: &str) -> Result<(f64, BaseUnit), DimvalError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(DimvalError::MalformedInput(s.to_string()));
    }

    let magnitude: f64 = parts[0]
        .parse()
        .map_err(|_| DimvalError::InvalidNumericLiteral(parts[0].to_string()))?;
    let (unit, factor) = resolve_token(parts[1])?;

    Ok((magnitude * factor, unit))
}

/// Look up a base unit by its exact abbreviation.
fn base_unit_for(token: &str) -> Option<BaseUnit> {
    BaseUnit::ALL.into_iter().find(|u| u.abbreviation() == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_bare_units() {
        assert_eq!(resolve_token("m").unwrap(), (BaseUnit::Meter, 1.0));
        assert_eq!(resolve_token("g").unwrap(), (BaseUnit::Gram, 1.0));
    }

    #[test]
    fn test_resolve_prefixed_units() {
        assert_eq!(resolve_token("Km").unwrap(), (BaseUnit::Meter, 1000.0));
        assert_eq!(resolve_token("Kg").unwrap(), (BaseUnit::Gram, 1000.0));
        assert_eq!(resolve_token("mm").unwrap(), (BaseUnit::Meter, 0.001));
        assert_eq!(resolve_token("mg").unwrap(), (BaseUnit::Gram, 0.001));
    }

    #[test]
    fn test_bare_unit_wins_over_prefix() {
        // "m" is both the meter abbreviation and the milli prefix; a
        // bare match resolves first.
        assert_eq!(resolve_token("m").unwrap(), (BaseUnit::Meter, 1.0));
    }

    #[test]
    fn test_resolve_rejects_unknown_tokens() {
        for token in ["", "x", "xyz", "gm", "Kx", "KK", "mKg", "m m"] {
            let err = resolve_token(token).unwrap_err();
            assert_eq!(err, DimvalError::InvalidUnitToken(token.to_string()));
        }
    }

    #[test]
    fn test_resolve_rejects_lone_prefix() {
        assert!(resolve_token("K").is_err());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        assert!(resolve_token("kg").is_err());
        assert!(resolve_token("M").is_err());
        assert!(resolve_token("G").is_err());
        assert!(resolve_token("KG").is_err());
    }

    #[test]
    fn test_resolve_does_not_trim() {
        assert!(resolve_token(" m").is_err());
        assert!(resolve_token("g ").is_err());
    }

    #[test]
    fn test_parse_quantity_string() {
        assert_eq!(parse_quantity_string("1 g").unwrap(), (1.0, BaseUnit::Gram));
        assert_eq!(
            parse_quantity_string("2.5 Km").unwrap(),
            (2500.0, BaseUnit::Meter)
        );
        assert_eq!(
            parse_quantity_string("100 mm").unwrap(),
            (0.1, BaseUnit::Meter)
        );
        assert_eq!(
            parse_quantity_string("-2.5 m").unwrap(),
            (-2.5, BaseUnit::Meter)
        );
    }

    #[test]
    fn test_parse_accepts_float_notation() {
        assert_eq!(
            parse_quantity_string("1e3 g").unwrap(),
            (1000.0, BaseUnit::Gram)
        );
    }

    #[test]
    fn test_parse_tolerates_repeated_whitespace() {
        assert_eq!(
            parse_quantity_string("  3.0   g ").unwrap(),
            (3.0, BaseUnit::Gram)
        );
    }

    #[test]
    fn test_parse_rejects_wrong_part_count() {
        for s in ["", "   ", "3.0", "g", "3.0 g extra"] {
            let err = parse_quantity_string(s).unwrap_err();
            assert_eq!(err, DimvalError::MalformedInput(s.to_string()));
        }
    }

    #[test]
    fn test_parse_rejects_bad_numeric_literal() {
        let err = parse_quantity_string("abc g").unwrap_err();
        assert_eq!(err, DimvalError::InvalidNumericLiteral("abc".to_string()));

        let err = parse_quantity_string("1,5 g").unwrap_err();
        assert_eq!(err, DimvalError::InvalidNumericLiteral("1,5".to_string()));
    }

    #[test]
    fn test_parse_rejects_unknown_unit() {
        let err = parse_quantity_string("1 xyz").unwrap_err();
        assert_eq!(err, DimvalError::InvalidUnitToken("xyz".to_string()));
    }
}
