//! Arbitrary-precision base conversion
//!
//! Converts between non-negative big integers and digit strings in any base
//! from 2 to 256. Digit strings are byte strings because bases above 128 use
//! symbols outside ASCII. The alphabet is always passed in by the caller;
//! [`default_alphabet`] builds the conventional one for a given base.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::CryptoError;

/// Smallest supported base
pub const MIN_BASE: u32 = 2;

/// Largest supported base
pub const MAX_BASE: u32 = 256;

const SMALL_DIGITS: &[u8; 64] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_";

/// Conventional alphabet for `base`
///
/// Bases up to 64 use `0-9a-zA-Z-_`; larger bases use every byte value in
/// order, so base 256 is the identity mapping onto raw bytes.
pub fn default_alphabet(base: u32) -> Result<Vec<u8>, CryptoError> {
    check_base(base)?;
    let len = base as usize;
    if base > 64 {
        Ok((0..=255u8).take(len).collect())
    } else {
        Ok(SMALL_DIGITS[..len].to_vec())
    }
}

/// Render `value` in `base`, most significant digit first
///
/// Zero renders as the single digit `alphabet[0]`.
pub fn to_base(value: &BigUint, base: u32, alphabet: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_alphabet(base, alphabet)?;

    if value.is_zero() {
        return Ok(vec![alphabet[0]]);
    }

    let divisor = BigUint::from(base);
    let mut rest = value.clone();
    let mut digits = Vec::new();
    while !rest.is_zero() {
        let remainder = (&rest % &divisor)
            .to_usize()
            .ok_or(CryptoError::InvalidBase(base))?;
        digits.push(alphabet[remainder]);
        rest /= &divisor;
    }
    digits.reverse();
    Ok(digits)
}

/// Parse a digit string in `base` back into an integer
///
/// Input is folded to lowercase first when `base < 37`, so hex and other
/// small bases accept either case. An empty input is zero.
pub fn from_base(digits: &[u8], base: u32, alphabet: &[u8]) -> Result<BigUint, CryptoError> {
    check_alphabet(base, alphabet)?;

    let symbols = &alphabet[..base as usize];
    let fold = base < 37;
    let mut value = BigUint::zero();
    for (position, &raw) in digits.iter().enumerate() {
        let digit = if fold { raw.to_ascii_lowercase() } else { raw };
        let index = symbols
            .iter()
            .position(|&symbol| symbol == digit)
            .ok_or(CryptoError::InvalidDigit { digit: raw, position })?;
        value = value * base + index;
    }
    Ok(value)
}

fn check_base(base: u32) -> Result<(), CryptoError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(CryptoError::InvalidBase(base));
    }
    Ok(())
}

fn check_alphabet(base: u32, alphabet: &[u8]) -> Result<(), CryptoError> {
    check_base(base)?;
    if alphabet.len() < base as usize {
        return Err(CryptoError::InvalidAlphabet {
            base,
            len: alphabet.len(),
        });
    }
    Ok(())
}
