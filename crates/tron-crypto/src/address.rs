//! Address derivation and Base58Check address text

use tron_primitives::Address;

use crate::base58check::{self, CHECKSUM_LEN};
use crate::{keccak256, public_key_to_bytes, sha256d, CryptoError, PublicKey};

/// Length of a base58 Tron address
pub const BASE58_ADDRESS_LEN: usize = 34;

/// Length of a decoded base58 address: prefix + account id + checksum
pub const DECODED_ADDRESS_LEN: usize = Address::LEN + CHECKSUM_LEN;

/// Derive an address from a raw secp256k1 public key
///
/// Accepts the 65-byte uncompressed encoding (`0x04 || X || Y`) or the bare
/// 64-byte `X || Y`.
pub fn pub_key_to_address(public_key: &[u8]) -> Result<Address, CryptoError> {
    let xy = match public_key.len() {
        65 => &public_key[1..],
        64 => public_key,
        n => {
            return Err(CryptoError::InvalidPublicKey(format!(
                "expected 64 or 65 bytes, got {}",
                n
            )))
        }
    };

    Ok(address_from_xy(xy))
}

/// Derive the address of a k256 public key
pub fn public_key_to_address(public_key: &PublicKey) -> Address {
    address_from_xy(&public_key_to_bytes(public_key)[1..])
}

// Last 20 bytes of keccak256(X || Y) behind the network prefix
fn address_from_xy(xy: &[u8]) -> Address {
    let hash = keccak256(xy);
    let mut payload = [0u8; 20];
    payload.copy_from_slice(&hash.as_bytes()[12..]);
    Address::from_payload(payload)
}

/// Base58Check text of an address (prefix already embedded, no version byte)
pub fn hex_to_base58(address: &Address) -> String {
    base58check::encode(address.as_bytes(), None, false)
}

/// Parse base58 address text back to its raw form
///
/// The checksum is stripped but not verified; use [`is_valid`] for that.
pub fn base58_to_hex(text: &str) -> Result<Address, CryptoError> {
    let payload = base58check::decode(text, 0, CHECKSUM_LEN, false)?;
    Address::from_slice(&payload).map_err(|e| CryptoError::InvalidLength(e.to_string()))
}

/// Check a base58 address: length, prefix and checksum
///
/// Returns `Ok(false)` for any well-formed but invalid address. Errors only
/// when the text contains a symbol outside the Base58 alphabet.
pub fn is_valid(text: &str) -> Result<bool, CryptoError> {
    if text.len() != BASE58_ADDRESS_LEN {
        return Ok(false);
    }

    let raw = base58check::decode_raw(text)?;
    if raw.len() != DECODED_ADDRESS_LEN {
        return Ok(false);
    }
    if raw[0] != Address::PREFIX {
        return Ok(false);
    }

    let (address, checksum) = raw.split_at(Address::LEN);
    Ok(checksum == &sha256d(address).as_bytes()[..CHECKSUM_LEN])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_BASE58: &str = "T9yD14Nj9j7xAB4dbGeiX9h8unkKHxuWwb";
    const USDT_BASE58: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";
    const USDT_HEX: &str = "41a614f803b6fd780986a42c78ec9c7f77e6ded13c";

    // Public key of the private key 0x01 (the generator point)
    const G_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    #[test]
    fn test_pub_key_to_address_65_bytes() {
        let key = hex::decode(G_UNCOMPRESSED).unwrap();
        let address = pub_key_to_address(&key).unwrap();
        assert_eq!(address.to_hex(), "417e5f4552091a69125d5dfcb7b8c2659029395bdf");
    }

    #[test]
    fn test_pub_key_to_address_64_bytes() {
        let key = hex::decode(G_UNCOMPRESSED).unwrap();
        assert_eq!(
            pub_key_to_address(&key[1..]).unwrap(),
            pub_key_to_address(&key).unwrap()
        );
    }

    #[test]
    fn test_k256_key_matches_raw_derivation() {
        let key = hex::decode(G_UNCOMPRESSED).unwrap();
        let public_key = PublicKey::from_sec1_bytes(&key).unwrap();
        assert_eq!(
            public_key_to_address(&public_key),
            pub_key_to_address(&key).unwrap()
        );
        assert_eq!(
            public_key_to_address(&public_key).to_hex(),
            "417e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
    }

    #[test]
    fn test_pub_key_to_address_bad_length() {
        assert!(matches!(
            pub_key_to_address(&[0x02; 33]),
            Err(CryptoError::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn test_hex_to_base58_known() {
        assert_eq!(hex_to_base58(&Address::ZERO), ZERO_BASE58);
        let usdt = Address::from_hex(USDT_HEX).unwrap();
        assert_eq!(hex_to_base58(&usdt), USDT_BASE58);
    }

    #[test]
    fn test_base58_to_hex_known() {
        assert_eq!(base58_to_hex(USDT_BASE58).unwrap().to_hex(), USDT_HEX);
        assert_eq!(base58_to_hex(ZERO_BASE58).unwrap(), Address::ZERO);
    }

    #[test]
    fn test_is_valid_known() {
        assert!(is_valid(USDT_BASE58).unwrap());
        assert!(is_valid(ZERO_BASE58).unwrap());
        assert!(is_valid("TMVQGm1qAQYVdetCeGRRkTWYYrLXuHK2HC").unwrap());
    }

    #[test]
    fn test_is_valid_wrong_length() {
        assert!(!is_valid("").unwrap());
        assert!(!is_valid(&USDT_BASE58[..33]).unwrap());
        assert!(!is_valid(&format!("{}1", USDT_BASE58)).unwrap());
    }

    #[test]
    fn test_is_valid_bad_checksum() {
        // Last character changed: same length, checksum no longer matches
        assert!(!is_valid("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6u").unwrap());
    }

    #[test]
    fn test_is_valid_wrong_prefix() {
        // Same shape and valid checksum, but prefix 0x42
        let mut bytes = [0u8; 21];
        bytes[0] = 0x42;
        let text = base58check::encode(&bytes, None, false);
        assert_eq!(text.len(), BASE58_ADDRESS_LEN);
        assert!(!is_valid(&text).unwrap());
    }

    #[test]
    fn test_is_valid_invalid_character_errors() {
        assert!(is_valid("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj60").is_err());
    }
}
