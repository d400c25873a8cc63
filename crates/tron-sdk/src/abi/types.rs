//! ABI type and value definitions

use std::fmt;
use std::str::FromStr;

use tron_primitives::{Address, H256, U256};

use crate::SdkError;

/// Parameter types understood by the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbiType {
    /// Network address, encoded as its 20-byte account id
    Address,
    /// Boolean
    Bool,
    /// Fixed-size bytes (size 1-32)
    FixedBytes(usize),
    /// Dynamic bytes
    Bytes,
    /// Signed integer with bit size (8, 16, ..., 256)
    Int(usize),
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// UTF-8 string
    String,
}

impl AbiType {
    /// Whether the value lives in the tail (variable length)
    pub fn is_dynamic(&self) -> bool {
        matches!(self, AbiType::Bytes | AbiType::String)
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiType::Address => write!(f, "address"),
            AbiType::Bool => write!(f, "bool"),
            AbiType::FixedBytes(size) => write!(f, "bytes{}", size),
            AbiType::Bytes => write!(f, "bytes"),
            AbiType::Int(bits) => write!(f, "int{}", bits),
            AbiType::Uint(bits) => write!(f, "uint{}", bits),
            AbiType::String => write!(f, "string"),
        }
    }
}

impl FromStr for AbiType {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_type(s)
    }
}

/// Parse a type name (e.g., "uint256", "address", "bytes32")
///
/// `uint` and `int` without a size mean 256 bits.
pub fn parse_type(s: &str) -> Result<AbiType, SdkError> {
    let s = s.trim();

    match s {
        "address" => return Ok(AbiType::Address),
        "bool" => return Ok(AbiType::Bool),
        "string" => return Ok(AbiType::String),
        "bytes" => return Ok(AbiType::Bytes),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("uint") {
        return parse_bits(rest, s).map(AbiType::Uint);
    }
    if let Some(rest) = s.strip_prefix("int") {
        return parse_bits(rest, s).map(AbiType::Int);
    }
    if let Some(rest) = s.strip_prefix("bytes") {
        let size: usize = rest
            .parse()
            .map_err(|_| SdkError::AbiEncode(format!("Unknown type: {}", s)))?;
        if !(1..=32).contains(&size) {
            return Err(SdkError::AbiEncode(format!("Invalid bytes size: {}", size)));
        }
        return Ok(AbiType::FixedBytes(size));
    }

    Err(SdkError::AbiEncode(format!("Unknown type: {}", s)))
}

fn parse_bits(rest: &str, full: &str) -> Result<usize, SdkError> {
    if rest.is_empty() {
        return Ok(256);
    }
    let bits: usize = rest
        .parse()
        .map_err(|_| SdkError::AbiEncode(format!("Unknown type: {}", full)))?;
    if bits == 0 || bits > 256 || bits % 8 != 0 {
        return Err(SdkError::AbiEncode(format!("Invalid integer size: {}", bits)));
    }
    Ok(bits)
}

/// Signed 256-bit integer as sign and magnitude
///
/// Zero is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct I256 {
    abs: U256,
    negative: bool,
}

impl I256 {
    /// Create from magnitude and sign
    pub fn new(abs: U256, negative: bool) -> Self {
        Self {
            abs,
            negative: negative && !abs.is_zero(),
        }
    }

    /// Create from i128
    pub fn from_i128(value: i128) -> Self {
        Self::new(U256::from(value.unsigned_abs()), value < 0)
    }

    /// Magnitude
    pub fn abs(&self) -> U256 {
        self.abs
    }

    /// Sign
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }

    /// Whether the value fits a two's-complement integer of `bits` bits
    pub fn fits(&self, bits: usize) -> bool {
        if bits == 0 {
            return self.is_zero();
        }
        let magnitude_bits = self.abs.bits();
        if magnitude_bits < bits {
            return true;
        }
        // -2^(bits-1) is the one value whose magnitude needs the full width
        self.negative && magnitude_bits == bits && self.abs.trailing_zeros() as usize == bits - 1
    }
}

impl From<i64> for I256 {
    fn from(value: i64) -> Self {
        Self::from_i128(value as i128)
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.abs)
        } else {
            write!(f, "{}", self.abs)
        }
    }
}

/// A decoded or to-be-encoded parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    /// Network address (prefix included)
    Address(Address),
    /// Boolean
    Bool(bool),
    /// Fixed-size bytes; the length must equal the declared size
    FixedBytes(Vec<u8>),
    /// Dynamic bytes
    Bytes(Vec<u8>),
    /// Signed integer
    Int(I256),
    /// Unsigned integer
    Uint(U256),
    /// UTF-8 string
    String(String),
}

impl AbiValue {
    /// Create a uint value from u128
    pub fn uint(value: u128) -> Self {
        AbiValue::Uint(U256::from(value))
    }

    /// Create an int value from i128
    pub fn int(value: i128) -> Self {
        AbiValue::Int(I256::from_i128(value))
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        AbiValue::String(s.into())
    }

    /// Create a bytes32 value
    pub fn bytes32(data: H256) -> Self {
        AbiValue::FixedBytes(data.as_bytes().to_vec())
    }

    /// Short name of the value's kind, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            AbiValue::Address(_) => "address",
            AbiValue::Bool(_) => "bool",
            AbiValue::FixedBytes(_) => "fixed bytes",
            AbiValue::Bytes(_) => "bytes",
            AbiValue::Int(_) => "int",
            AbiValue::Uint(_) => "uint",
            AbiValue::String(_) => "string",
        }
    }

    /// Unsigned value, if this is a uint
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            AbiValue::Uint(v) => Some(*v),
            _ => None,
        }
    }

    /// Address, if this is an address
    pub fn as_address(&self) -> Option<&Address> {
        match self {
            AbiValue::Address(a) => Some(a),
            _ => None,
        }
    }

    /// String slice, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AbiValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean, if this is a bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AbiValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<Address> for AbiValue {
    fn from(address: Address) -> Self {
        AbiValue::Address(address)
    }
}

impl From<U256> for AbiValue {
    fn from(value: U256) -> Self {
        AbiValue::Uint(value)
    }
}

impl From<I256> for AbiValue {
    fn from(value: I256) -> Self {
        AbiValue::Int(value)
    }
}

impl From<bool> for AbiValue {
    fn from(value: bool) -> Self {
        AbiValue::Bool(value)
    }
}

impl From<String> for AbiValue {
    fn from(value: String) -> Self {
        AbiValue::String(value)
    }
}

impl From<&str> for AbiValue {
    fn from(value: &str) -> Self {
        AbiValue::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abi_type_is_dynamic() {
        assert!(!AbiType::Address.is_dynamic());
        assert!(!AbiType::Uint(256).is_dynamic());
        assert!(!AbiType::Bool.is_dynamic());
        assert!(!AbiType::FixedBytes(32).is_dynamic());

        assert!(AbiType::Bytes.is_dynamic());
        assert!(AbiType::String.is_dynamic());
    }

    #[test]
    fn test_parse_type() {
        assert_eq!(parse_type("address").unwrap(), AbiType::Address);
        assert_eq!(parse_type("uint256").unwrap(), AbiType::Uint(256));
        assert_eq!(parse_type("uint").unwrap(), AbiType::Uint(256));
        assert_eq!(parse_type("int").unwrap(), AbiType::Int(256));
        assert_eq!(parse_type("uint8").unwrap(), AbiType::Uint(8));
        assert_eq!(parse_type(" bool ").unwrap(), AbiType::Bool);
        assert_eq!(parse_type("bytes").unwrap(), AbiType::Bytes);
        assert_eq!(parse_type("bytes1").unwrap(), AbiType::FixedBytes(1));
        assert_eq!(parse_type("bytes32").unwrap(), AbiType::FixedBytes(32));
        assert_eq!(parse_type("string").unwrap(), AbiType::String);
    }

    #[test]
    fn test_parse_type_rejects() {
        for bad in ["uint7", "uint0", "uint264", "int9", "bytes0", "bytes33", "address[]", "tuple", ""] {
            assert!(
                matches!(parse_type(bad), Err(SdkError::AbiEncode(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_display_roundtrip() {
        for t in [
            AbiType::Address,
            AbiType::Bool,
            AbiType::FixedBytes(4),
            AbiType::Bytes,
            AbiType::Int(64),
            AbiType::Uint(256),
            AbiType::String,
        ] {
            assert_eq!(t.to_string().parse::<AbiType>().unwrap(), t);
        }
    }

    #[test]
    fn test_i256_from_i128() {
        let positive = I256::from_i128(100);
        assert!(!positive.is_negative());
        assert_eq!(positive.abs(), U256::from(100));

        let negative = I256::from_i128(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs(), U256::from(100));

        let min = I256::from_i128(i128::MIN);
        assert_eq!(min.abs(), U256::from(1u128 << 127));
    }

    #[test]
    fn test_i256_negative_zero_normalized() {
        let zero = I256::new(U256::zero(), true);
        assert!(!zero.is_negative());
        assert_eq!(zero, I256::default());
    }

    #[test]
    fn test_i256_fits() {
        assert!(I256::from_i128(127).fits(8));
        assert!(!I256::from_i128(128).fits(8));
        assert!(I256::from_i128(-128).fits(8));
        assert!(!I256::from_i128(-129).fits(8));
        assert!(!I256::from_i128(-192).fits(8));
        assert!(I256::new(U256::one() << 255, true).fits(256));
        assert!(!I256::new(U256::one() << 255, false).fits(256));
    }

    #[test]
    fn test_i256_display() {
        assert_eq!(I256::from_i128(-42).to_string(), "-42");
        assert_eq!(I256::from_i128(7).to_string(), "7");
    }
}
