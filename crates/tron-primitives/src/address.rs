//! Tron network address (21 bytes: prefix byte + 20-byte account id)

use std::fmt;
use thiserror::Error;

/// Address parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),
    /// Invalid length
    #[error("invalid address length: expected 21 bytes, got {0}")]
    InvalidLength(usize),
    /// First byte is not the network prefix
    #[error("invalid address prefix: expected 0x41, got {0:#04x}")]
    InvalidPrefix(u8),
}

/// Tron address in its raw 21-byte form
///
/// The first byte is always [`Address::PREFIX`]. The remaining 20 bytes are
/// the last 20 bytes of the Keccak-256 hash of the owner's public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 21]);

impl Address {
    /// Size of address in bytes
    pub const LEN: usize = 21;

    /// Size of the account id that follows the prefix
    pub const PAYLOAD_LEN: usize = 20;

    /// Network prefix byte
    pub const PREFIX: u8 = 0x41;

    /// Zero address (`410000...00`, base58 `T9yD14Nj9j7xAB4dbGeiX9h8unkKHxuWwb`)
    pub const ZERO: Address = {
        let mut bytes = [0u8; 21];
        bytes[0] = Address::PREFIX;
        Address(bytes)
    };

    /// Build an address from its 20-byte account id
    pub fn from_payload(payload: [u8; 20]) -> Self {
        let mut bytes = [0u8; 21];
        bytes[0] = Self::PREFIX;
        bytes[1..].copy_from_slice(&payload);
        Address(bytes)
    }

    /// Create address from a full 21-byte value
    pub fn from_bytes(bytes: [u8; 21]) -> Result<Self, AddressError> {
        if bytes[0] != Self::PREFIX {
            return Err(AddressError::InvalidPrefix(bytes[0]));
        }
        Ok(Address(bytes))
    }

    /// Create address from slice
    pub fn from_slice(slice: &[u8]) -> Result<Self, AddressError> {
        let bytes: [u8; 21] = slice
            .try_into()
            .map_err(|_| AddressError::InvalidLength(slice.len()))?;
        Self::from_bytes(bytes)
    }

    /// Parse address from hex string (with or without 0x prefix)
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| AddressError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    /// Get as byte slice
    pub fn as_bytes(&self) -> &[u8; 21] {
        &self.0
    }

    /// The 20-byte account id, as used in ABI encoding
    pub fn payload(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0[1..] == [0u8; 20]
    }

    /// Lowercase hex, 42 chars, starting with `41`
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for Address {
    fn default() -> Self {
        Address::ZERO
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<[u8; 21]> for Address {
    type Error = AddressError;

    fn try_from(bytes: [u8; 21]) -> Result<Self, Self::Error> {
        Address::from_bytes(bytes)
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::from_hex(s)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
