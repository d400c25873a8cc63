//! Hex conversion helpers for node request fields
//!
//! Node APIs take addresses as hex and free text (token names, memos) as
//! UTF-8 hex. These helpers pick the conversion from the shape of the input.

use tron_crypto::{base58_to_hex, hex_to_base58, is_valid};
use tron_primitives::Address;

use crate::SdkError;

/// Hex form of a value
///
/// A 34-character string starting with `T` is treated as a base58 address and
/// must carry a valid checksum. Anything else is hex-encoded as UTF-8.
pub fn to_hex(value: &str) -> Result<String, SdkError> {
    if looks_like_base58_address(value) {
        if !is_valid(value)? {
            return Err(SdkError::InvalidAddress(format!(
                "{} has an invalid checksum",
                value
            )));
        }
        return Ok(base58_to_hex(value)?.to_hex());
    }
    Ok(hex::encode(value.as_bytes()))
}

/// Readable form of a hex value
///
/// 42 hex characters starting with `41` become a base58 address; any other
/// hex is decoded as UTF-8 text.
pub fn from_hex(value: &str) -> Result<String, SdkError> {
    if value.len() == 42 && value.starts_with("41") {
        if let Ok(address) = Address::from_hex(value) {
            return Ok(hex_to_base58(&address));
        }
    }
    let bytes = hex::decode(value)?;
    String::from_utf8(bytes).map_err(|e| SdkError::InvalidHex(format!("not UTF-8 text: {}", e)))
}

fn looks_like_base58_address(value: &str) -> bool {
    value.len() == 34 && value.starts_with('T')
}
