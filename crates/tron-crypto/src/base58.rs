//! Plain Base58 over the big-integer converter
//!
//! This is the raw integer encoding: leading zero bytes vanish on the way in
//! and are not recreated on the way out. [`crate::base58check`] restores them.

use num_bigint::BigUint;

use crate::base::{from_base, to_base};
use crate::CryptoError;

/// The Base58 alphabet (no `0`, `O`, `I`, `l`)
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode bytes as a big-endian integer in base 58
pub fn encode(bytes: &[u8]) -> String {
    let value = BigUint::from_bytes_be(bytes);
    // base and alphabet are fixed and valid
    let digits = to_base(&value, 58, BASE58_ALPHABET).unwrap_or_default();
    digits.into_iter().map(char::from).collect()
}

/// Decode base 58 text to the minimal big-endian bytes of its value
///
/// Zero decodes to an empty vector.
pub fn decode(text: &str) -> Result<Vec<u8>, CryptoError> {
    let value = from_base(text.as_bytes(), 58, BASE58_ALPHABET)?;
    if value.bits() == 0 {
        return Ok(Vec::new());
    }
    Ok(value.to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(b"hello world"), "StV1DL6CwTryKyV");
        assert_eq!(encode(&[0x61]), "2g");
    }

    #[test]
    fn test_leading_zeros_are_dropped() {
        // 0x0000287fb4cd is the integer 0x287fb4cd
        assert_eq!(encode(&hex::decode("0000287fb4cd").unwrap()), "233QC4");
        assert_eq!(decode("233QC4").unwrap(), hex::decode("287fb4cd").unwrap());
    }

    #[test]
    fn test_zero() {
        assert_eq!(encode(&[]), "1");
        assert_eq!(encode(&[0, 0]), "1");
        assert!(decode("1").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_excluded_symbols() {
        for bad in ["0", "O", "I", "l", "+"] {
            assert!(
                matches!(decode(bad), Err(CryptoError::InvalidDigit { .. })),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        assert_ne!(decode("a").unwrap(), decode("A").unwrap());
    }

    #[test]
    fn test_roundtrip_without_leading_zero() {
        let data = hex::decode("41a614f803b6fd780986a42c78ec9c7f77e6ded13c").unwrap();
        assert_eq!(decode(&encode(&data)).unwrap(), data);
    }
}
