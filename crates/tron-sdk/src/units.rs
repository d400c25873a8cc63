//! Amount conversion between display units and base units
//!
//! Amounts travel as decimal strings so no precision is lost to floats.

use tron_primitives::U256;

use crate::{SdkConfig, SdkError};

/// Sun in one TRX
pub const SUN_PER_TRX: u64 = 1_000_000;

/// Decimal places of TRX
pub const TRX_DECIMALS: u32 = 6;

/// Most decimal places a `U256` amount can carry (10^78 overflows)
pub const MAX_DECIMALS: u32 = 77;

/// Convert a TRX amount such as `"1.5"` to sun
pub fn to_sun(trx: &str) -> Result<u64, SdkError> {
    let sun = to_base_units(trx, TRX_DECIMALS)?;
    if sun > U256::from(u64::MAX) {
        return Err(SdkError::InvalidAmount(format!("{} TRX overflows", trx)));
    }
    Ok(sun.as_u64())
}

/// Format sun as a TRX amount, e.g. `1_500_000` → `"1.5"`
pub fn from_sun(sun: u64) -> String {
    render_units(&U256::from(sun), TRX_DECIMALS as usize)
}

/// Convert a decimal amount to base units with `decimals` places
///
/// Digits past `decimals` must be zero; they are never rounded away.
pub fn to_base_units(amount: &str, decimals: u32) -> Result<U256, SdkError> {
    check_decimals(decimals)?;
    let invalid = |reason: &str| SdkError::InvalidAmount(format!("{:?}: {}", amount, reason));

    let trimmed = amount.trim();
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("no digits"));
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid("only digits and one decimal point are allowed"));
    }

    let places = decimals as usize;
    let (kept, dropped) = fraction.split_at(fraction.len().min(places));
    if dropped.chars().any(|c| c != '0') {
        return Err(invalid(&format!("more than {} decimal places", decimals)));
    }

    let mut digits = String::with_capacity(whole.len() + places);
    digits.push_str(whole);
    digits.push_str(kept);
    digits.extend(std::iter::repeat('0').take(places - kept.len()));

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_dec_str(digits).map_err(|_| invalid("exceeds 256 bits"))
}

/// Format base units as a decimal amount, trailing zeros trimmed
pub fn format_units(value: &U256, decimals: u32) -> Result<String, SdkError> {
    check_decimals(decimals)?;
    Ok(render_units(value, decimals as usize))
}

/// Token amount to base units with the configured default decimals
pub fn to_token_units(amount: &str, config: &SdkConfig) -> Result<U256, SdkError> {
    to_base_units(amount, config.default_token_decimals)
}

/// Format token base units with the configured default decimals
pub fn format_token_units(value: &U256, config: &SdkConfig) -> Result<String, SdkError> {
    format_units(value, config.default_token_decimals)
}

fn check_decimals(decimals: u32) -> Result<(), SdkError> {
    if decimals > MAX_DECIMALS {
        return Err(SdkError::InvalidAmount(format!(
            "{} decimals exceeds the maximum of {}",
            decimals, MAX_DECIMALS
        )));
    }
    Ok(())
}

fn render_units(value: &U256, places: usize) -> String {
    let mut digits = value.to_string();
    if digits.len() <= places {
        digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
    }

    let (whole, fraction) = digits.split_at(digits.len() - places);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_sun() {
        assert_eq!(to_sun("1").unwrap(), 1_000_000);
        assert_eq!(to_sun("1.5").unwrap(), 1_500_000);
        assert_eq!(to_sun("0.000001").unwrap(), 1);
        assert_eq!(to_sun(".5").unwrap(), 500_000);
        assert_eq!(to_sun("2.").unwrap(), 2_000_000);
        assert_eq!(to_sun("0").unwrap(), 0);
        assert_eq!(to_sun("1.2500000").unwrap(), 1_250_000);
    }

    #[test]
    fn test_to_sun_rejects() {
        for bad in ["", ".", "-1", "1.2.3", "1e6", "abc", "0.0000001", "1 000"] {
            assert!(
                matches!(to_sun(bad), Err(SdkError::InvalidAmount(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_to_sun_overflow() {
        assert!(matches!(
            to_sun("18446744073709.551616"),
            Err(SdkError::InvalidAmount(_))
        ));
        assert_eq!(to_sun("18446744073709.551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_from_sun() {
        assert_eq!(from_sun(1_500_000), "1.5");
        assert_eq!(from_sun(1_000_000), "1");
        assert_eq!(from_sun(1), "0.000001");
        assert_eq!(from_sun(0), "0");
        assert_eq!(from_sun(123_456_789), "123.456789");
    }

    #[test]
    fn test_token_units_18_decimals() {
        let value = to_base_units("1.05", 18).unwrap();
        assert_eq!(value, U256::from(1_050_000_000_000_000_000u128));
        assert_eq!(format_units(&value, 18).unwrap(), "1.05");
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(to_base_units("42", 0).unwrap(), U256::from(42));
        assert!(to_base_units("42.1", 0).is_err());
        assert_eq!(format_units(&U256::from(42), 0).unwrap(), "42");
    }

    #[test]
    fn test_base_units_beyond_u64() {
        let value = to_base_units("100000000000000000000", 6).unwrap();
        assert_eq!(value, U256::exp10(26));
        assert_eq!(format_units(&value, 6).unwrap(), "100000000000000000000");
    }

    #[test]
    fn test_base_units_overflow() {
        let too_big = "1".repeat(80);
        assert!(matches!(to_base_units(&too_big, 0), Err(SdkError::InvalidAmount(_))));
    }

    #[test]
    fn test_decimals_limit() {
        let one = to_base_units("1", MAX_DECIMALS).unwrap();
        assert_eq!(one, U256::exp10(77));
        assert_eq!(format_units(&one, MAX_DECIMALS).unwrap(), "1");

        assert!(matches!(to_base_units("1", 78), Err(SdkError::InvalidAmount(_))));
        assert!(matches!(
            format_units(&U256::one(), 78),
            Err(SdkError::InvalidAmount(_))
        ));
        assert!(matches!(
            format_units(&U256::one(), u32::MAX),
            Err(SdkError::InvalidAmount(_))
        ));
        assert!(to_base_units("1", u32::MAX).is_err());
    }

    #[test]
    fn test_token_units_follow_config() {
        let six = SdkConfig::default();
        let eighteen = SdkConfig {
            default_token_decimals: 18,
            ..SdkConfig::default()
        };

        assert_eq!(to_token_units("2.5", &six).unwrap(), U256::from(2_500_000u64));
        assert_eq!(
            to_token_units("2.5", &eighteen).unwrap(),
            U256::from(2_500_000_000_000_000_000u128)
        );

        let raw = U256::from(2_500_000u64);
        assert_eq!(format_token_units(&raw, &six).unwrap(), "2.5");
        assert_eq!(format_token_units(&raw, &eighteen).unwrap(), "0.0000000000025");
    }
}
