//! ABI encoding

use tracing::trace;
use tron_primitives::U256;

use super::function::FunctionDescriptor;
use super::types::{AbiType, AbiValue, I256};
use crate::SdkError;

/// Encode values against a list of types
///
/// Every parameter takes one 32-byte head word; dynamic values put their
/// offset in the head and their contents in the tail.
pub fn encode(types: &[AbiType], values: &[AbiValue]) -> Result<Vec<u8>, SdkError> {
    if types.len() != values.len() {
        return Err(SdkError::ParameterCount {
            expected: types.len(),
            got: values.len(),
        });
    }

    let head_size = types.len() * 32;
    let mut head = Vec::with_capacity(head_size);
    let mut tail = Vec::new();

    for (index, (abi_type, value)) in types.iter().zip(values).enumerate() {
        let encoded = encode_value(abi_type, value).map_err(|e| match e {
            SdkError::AbiEncode(msg) => SdkError::AbiEncode(format!("parameter {}: {}", index, msg)),
            other => other,
        })?;
        if abi_type.is_dynamic() {
            head.extend(encode_usize(head_size + tail.len()));
            tail.extend(encoded);
        } else {
            head.extend(encoded);
        }
    }

    head.extend(tail);
    trace!(params = types.len(), bytes = head.len(), "abi encoded");
    Ok(head)
}

/// Encode a function's parameters as bare hex (no `0x`, no selector)
pub fn encode_parameters(
    function: &FunctionDescriptor,
    values: &[AbiValue],
) -> Result<String, SdkError> {
    encode(&function.inputs, values).map(hex::encode)
}

/// Encode a full call: selector followed by parameters
pub fn encode_call(function: &FunctionDescriptor, values: &[AbiValue]) -> Result<Vec<u8>, SdkError> {
    let mut data = function.selector().to_vec();
    data.extend(encode(&function.inputs, values)?);
    Ok(data)
}

/// Compute function selector (first 4 bytes of keccak256(signature))
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = tron_crypto::keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}

fn encode_value(abi_type: &AbiType, value: &AbiValue) -> Result<Vec<u8>, SdkError> {
    match (abi_type, value) {
        (AbiType::Address, AbiValue::Address(address)) => {
            let mut buf = [0u8; 32];
            buf[12..32].copy_from_slice(address.payload());
            Ok(buf.to_vec())
        }
        (AbiType::Bool, AbiValue::Bool(b)) => {
            let mut buf = [0u8; 32];
            buf[31] = u8::from(*b);
            Ok(buf.to_vec())
        }
        (AbiType::Uint(bits), AbiValue::Uint(v)) => {
            if v.bits() > *bits {
                return Err(SdkError::AbiEncode(format!("{} does not fit uint{}", v, bits)));
            }
            Ok(u256_to_bytes(v).to_vec())
        }
        (AbiType::Int(bits), AbiValue::Int(v)) => {
            if !v.fits(*bits) {
                return Err(SdkError::AbiEncode(format!("{} does not fit int{}", v, bits)));
            }
            Ok(i256_to_bytes(v).to_vec())
        }
        (AbiType::FixedBytes(size), AbiValue::FixedBytes(data)) => {
            if *size == 0 || *size > 32 || data.len() != *size {
                return Err(SdkError::AbiEncode(format!(
                    "bytes{} given {} bytes",
                    size,
                    data.len()
                )));
            }
            let mut buf = [0u8; 32];
            buf[..data.len()].copy_from_slice(data);
            Ok(buf.to_vec())
        }
        (AbiType::Bytes, AbiValue::Bytes(data)) => Ok(encode_bytes(data)),
        (AbiType::String, AbiValue::String(s)) => Ok(encode_bytes(s.as_bytes())),
        (expected, got) => Err(SdkError::AbiEncode(format!(
            "expected {}, got {} value",
            expected,
            got.kind()
        ))),
    }
}

/// Convert U256 to 32-byte big-endian array
pub(crate) fn u256_to_bytes(value: &U256) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes
}

/// Two's complement of a sign-magnitude value
fn i256_to_bytes(value: &I256) -> [u8; 32] {
    let bytes = u256_to_bytes(&value.abs());
    if !value.is_negative() {
        return bytes;
    }
    let (negated, _) = (!U256::from_big_endian(&bytes)).overflowing_add(U256::one());
    u256_to_bytes(&negated)
}

fn encode_usize(value: usize) -> [u8; 32] {
    u256_to_bytes(&U256::from(value))
}

/// Length word followed by the data right-padded to a multiple of 32
fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut result = encode_usize(data.len()).to_vec();

    let padded_len = data.len().div_ceil(32) * 32;
    let mut padded = vec![0u8; padded_len];
    padded[..data.len()].copy_from_slice(data);
    result.extend(padded);

    result
}
