//! Contract ABI encoding and decoding
//!
//! This module provides functionality for:
//! - Computing function selectors
//! - Encoding call parameters
//! - Decoding call inputs and return values
//!
//! Addresses are encoded as their 20-byte account id and decoded back to
//! full `0x41`-prefixed addresses.
//!
//! # Example
//!
//! ```rust
//! use tron_sdk::abi::{decode_output, encode_parameters, AbiType, AbiValue, FunctionDescriptor};
//! use tron_sdk::Address;
//!
//! let transfer = FunctionDescriptor::new(
//!     "transfer",
//!     vec![AbiType::Address, AbiType::Uint(256)],
//!     vec![AbiType::Bool],
//! );
//! assert_eq!(transfer.selector(), [0xa9, 0x05, 0x9c, 0xbb]);
//!
//! let params = encode_parameters(&transfer, &[AbiValue::Address(Address::ZERO), AbiValue::uint(1000)]).unwrap();
//! assert_eq!(params.len(), 128);
//!
//! let result = decode_output(&transfer, &format!("{:064x}", 1)).unwrap();
//! assert_eq!(result, vec![AbiValue::Bool(true)]);
//! ```

mod decode;
mod encode;
mod function;
mod types;

pub use decode::{decode, decode_input, decode_output, decode_parameters};
pub use encode::{encode, encode_call, encode_parameters, function_selector};
pub use function::{FunctionDescriptor, StateMutability};
pub use types::{parse_type, AbiType, AbiValue, I256};
