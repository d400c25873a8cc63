//! ABI decoding

use tracing::trace;
use tron_primitives::{Address, U256};

use super::function::FunctionDescriptor;
use super::types::{AbiType, AbiValue, I256};
use crate::SdkError;

/// Decode values from ABI-encoded data
pub fn decode(types: &[AbiType], data: &[u8]) -> Result<Vec<AbiValue>, SdkError> {
    let mut values = Vec::with_capacity(types.len());

    for (index, abi_type) in types.iter().enumerate() {
        let value = decode_value(abi_type, data, index * 32).map_err(|e| match e {
            SdkError::AbiDecode(msg) => SdkError::AbiDecode(format!("parameter {}: {}", index, msg)),
            other => other,
        })?;
        values.push(value);
    }

    trace!(params = types.len(), bytes = data.len(), "abi decoded");
    Ok(values)
}

/// Decode hex-encoded parameters; a leading `0x` is accepted
pub fn decode_parameters(types: &[AbiType], hex: &str) -> Result<Vec<AbiValue>, SdkError> {
    decode(types, &decode_hex(hex)?)
}

/// Decode a function's call data against its inputs
///
/// The data may be the bare parameters or carry the 4-byte selector in
/// front, in which case the selector must match the function.
pub fn decode_input(function: &FunctionDescriptor, hex: &str) -> Result<Vec<AbiValue>, SdkError> {
    let data = decode_hex(hex)?;
    let params = if data.len() % 32 == 4 {
        let (selector, params) = data.split_at(4);
        if selector != function.selector() {
            return Err(SdkError::AbiDecode(format!(
                "selector {} does not match {}",
                hex::encode(selector),
                function.signature()
            )));
        }
        params
    } else {
        &data[..]
    };
    decode(&function.inputs, params)
}

/// Decode a function's return data against its outputs
pub fn decode_output(function: &FunctionDescriptor, hex: &str) -> Result<Vec<AbiValue>, SdkError> {
    decode_parameters(&function.outputs, hex)
}

fn decode_hex(hex: &str) -> Result<Vec<u8>, SdkError> {
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    hex::decode(hex).map_err(|e| SdkError::AbiDecode(format!("invalid hex: {}", e)))
}

fn decode_value(abi_type: &AbiType, data: &[u8], offset: usize) -> Result<AbiValue, SdkError> {
    let word = read_word(data, offset)?;

    match abi_type {
        AbiType::Address => {
            if word[..12].iter().any(|b| *b != 0) {
                return Err(SdkError::AbiDecode("address word has non-zero padding".to_string()));
            }
            let mut payload = [0u8; 20];
            payload.copy_from_slice(&word[12..32]);
            Ok(AbiValue::Address(Address::from_payload(payload)))
        }
        AbiType::Bool => match U256::from_big_endian(word) {
            v if v.is_zero() => Ok(AbiValue::Bool(false)),
            v if v == U256::one() => Ok(AbiValue::Bool(true)),
            v => Err(SdkError::AbiDecode(format!("{} is not a bool", v))),
        },
        AbiType::Uint(bits) => {
            let value = U256::from_big_endian(word);
            if value.bits() > *bits {
                return Err(SdkError::AbiDecode(format!("{} does not fit uint{}", value, bits)));
            }
            Ok(AbiValue::Uint(value))
        }
        AbiType::Int(bits) => {
            let raw = U256::from_big_endian(word);
            let value = if word[0] & 0x80 != 0 {
                let (abs, _) = (!raw).overflowing_add(U256::one());
                I256::new(abs, true)
            } else {
                I256::new(raw, false)
            };
            if !value.fits(*bits) {
                return Err(SdkError::AbiDecode(format!("{} does not fit int{}", value, bits)));
            }
            Ok(AbiValue::Int(value))
        }
        AbiType::FixedBytes(size) => {
            if *size == 0 || *size > 32 {
                return Err(SdkError::AbiDecode(format!("Invalid bytes size: {}", size)));
            }
            if word[*size..].iter().any(|b| *b != 0) {
                return Err(SdkError::AbiDecode(format!("bytes{} has non-zero padding", size)));
            }
            Ok(AbiValue::FixedBytes(word[..*size].to_vec()))
        }
        AbiType::Bytes => {
            let start = word_to_usize(word, data.len())?;
            Ok(AbiValue::Bytes(decode_bytes(data, start)?))
        }
        AbiType::String => {
            let start = word_to_usize(word, data.len())?;
            let bytes = decode_bytes(data, start)?;
            let s = String::from_utf8(bytes)
                .map_err(|e| SdkError::AbiDecode(format!("Invalid UTF-8: {}", e)))?;
            Ok(AbiValue::String(s))
        }
    }
}

/// Length-prefixed bytes starting at `offset`
fn decode_bytes(data: &[u8], offset: usize) -> Result<Vec<u8>, SdkError> {
    let len = word_to_usize(read_word(data, offset)?, data.len())?;
    let start = offset + 32;
    let end = start
        .checked_add(len)
        .ok_or_else(|| SdkError::AbiDecode(format!("length {} overflows", len)))?;
    check_length(data, end)?;
    Ok(data[start..end].to_vec())
}

fn read_word(data: &[u8], offset: usize) -> Result<&[u8], SdkError> {
    let end = offset
        .checked_add(32)
        .ok_or_else(|| SdkError::AbiDecode(format!("offset {} overflows", offset)))?;
    check_length(data, end)?;
    Ok(&data[offset..end])
}

/// Offsets and lengths must point inside the data
fn word_to_usize(word: &[u8], limit: usize) -> Result<usize, SdkError> {
    let value = U256::from_big_endian(word);
    if value > U256::from(limit) {
        return Err(SdkError::AbiDecode(format!(
            "offset or length {} beyond {} bytes of data",
            value, limit
        )));
    }
    Ok(value.as_usize())
}

/// Check that data has at least `required` bytes
fn check_length(data: &[u8], required: usize) -> Result<(), SdkError> {
    if data.len() < required {
        return Err(SdkError::AbiDecode(format!(
            "Insufficient data: need {} bytes, have {}",
            required,
            data.len()
        )));
    }
    Ok(())
}
