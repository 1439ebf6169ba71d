// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Parsing of denominated amounts such as `30 gwei`.

use alloy::primitives::{
    utils::{parse_units, UnitsError},
    U256,
};

#[derive(Debug, thiserror::Error)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("expected `<amount> [unit]`, got {0:?}")]
    Malformed(String),
    #[error("{0}")]
    Units(#[from] UnitsError),
    #[error("amount must be non-negative")]
    Negative,
    #[error("amount does not fit in 128 bits")]
    Overflow,
}

/// Parses an amount with an optional unit suffix into wei.
///
/// A bare number is taken as wei; otherwise the suffix is any unit understood by
/// [`parse_units`] (`wei`, `gwei`, `ether`, ...).
pub fn parse_wei(text: &str) -> Result<u128, AmountError> {
    let mut parts = text.split_whitespace();
    let amount = parts.next().ok_or(AmountError::Empty)?;
    let unit = parts.next().unwrap_or("wei");
    if parts.next().is_some() {
        return Err(AmountError::Malformed(text.to_string()));
    }
    if amount.starts_with('-') {
        return Err(AmountError::Negative);
    }
    let wei: U256 = parse_units(amount, unit)?.into();
    wei.try_into().map_err(|_| AmountError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_denominated_amounts() {
        assert_eq!(parse_wei("30 gwei").unwrap(), 30_000_000_000);
        assert_eq!(parse_wei("100 gwei").unwrap(), 100_000_000_000);
        assert_eq!(parse_wei("1 ether").unwrap(), 1_000_000_000_000_000_000);
        assert_eq!(parse_wei("42").unwrap(), 42);
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert!(matches!(parse_wei("   "), Err(AmountError::Empty)));
        assert!(matches!(
            parse_wei("30 gwei extra"),
            Err(AmountError::Malformed(_))
        ));
        assert!(matches!(parse_wei("30 parsecs"), Err(AmountError::Units(_))));
        assert!(matches!(parse_wei("-3 gwei"), Err(AmountError::Negative)));
    }
}
