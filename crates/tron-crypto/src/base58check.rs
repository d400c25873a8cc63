//! Base58Check: versioned, checksummed Base58
//!
//! `encode` appends the first four bytes of `sha256d` and writes one `'1'`
//! per leading zero byte, so payload length survives the integer encoding.
//! `decode` only strips bytes; checksum verification belongs to the caller
//! (see [`crate::address::is_valid`]).

use crate::{base58, sha256d, CryptoError};

/// Checksum length in bytes
pub const CHECKSUM_LEN: usize = 4;

/// Trailing marker used by compressed-key WIF payloads
pub const COMPRESSION_FLAG: u8 = 0x01;

/// First four bytes of `sha256d(data)`
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = sha256d(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash.as_bytes()[..CHECKSUM_LEN]);
    out
}

/// Encode `payload` with an optional version byte and compression flag
pub fn encode(payload: &[u8], version: Option<u8>, compressed: bool) -> String {
    let mut buffer = Vec::with_capacity(payload.len() + 2 + CHECKSUM_LEN);
    buffer.extend(version);
    buffer.extend_from_slice(payload);
    if compressed {
        buffer.push(COMPRESSION_FLAG);
    }
    let sum = checksum(&buffer);
    buffer.extend_from_slice(&sum);

    let zeros = buffer.iter().take_while(|&&b| b == 0).count();
    let body = &buffer[zeros..];

    // An all-zero buffer is only '1's, one per byte, so decode_raw inverts it
    let mut text = "1".repeat(zeros);
    if !body.is_empty() {
        text.push_str(&base58::encode(body));
    }
    text
}

/// Base58 decode that restores one `0x00` per leading `'1'`
pub fn decode_raw(text: &str) -> Result<Vec<u8>, CryptoError> {
    let zeros = text.bytes().take_while(|&b| b == base58::BASE58_ALPHABET[0]).count();
    let mut raw = vec![0u8; zeros];
    raw.extend(base58::decode(&text[zeros..])?);
    Ok(raw)
}

/// Decode and strip framing bytes
///
/// Removes `leading` bytes from the front, `trailing` bytes from the back,
/// and one more trailing byte when `compression` is set. The checksum is not
/// checked.
pub fn decode(
    text: &str,
    leading: usize,
    trailing: usize,
    compression: bool,
) -> Result<Vec<u8>, CryptoError> {
    let raw = decode_raw(text)?;
    let trailing = trailing + usize::from(compression);

    if leading + trailing > raw.len() {
        return Err(CryptoError::InvalidLength(format!(
            "cannot strip {} bytes from a {}-byte value",
            leading + trailing,
            raw.len()
        )));
    }
    Ok(raw[leading..raw.len() - trailing].to_vec())
}
