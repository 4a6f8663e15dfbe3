use super::{Amount, AmountError};
use anyhow::Result;
use rust_decimal_macros::dec;
use std::str::FromStr;

#[test]
fn test_amount_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.0"),
        ("2000.00", "2000.00"),
        ("0.0001", "0.0001"),
        ("  150.75  ", "150.75"),
        ("+1.5", "1.5"),
        ("100", "100"),
        ("0", "0"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Amount::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert!(Amount::from_str("abc").is_err());
    assert!(Amount::from_str("1.2.3").is_err());
    assert!(Amount::from_str("").is_err());
    assert!(Amount::from_str("   ").is_err());
}

#[test]
fn test_amount_rejects_negative_values() {
    assert!(matches!(Amount::from_str("-0.01"), Err(AmountError::Negative(_))));
    assert!(matches!(Amount::new(dec!(-150.75)), Err(AmountError::Negative(_))));
}

#[test]
fn test_amount_accepts_negative_zero_as_zero() -> Result<()> {
    let amount = Amount::from_str("-0.00")?;

    assert!(amount.value().is_zero());

    Ok(())
}
