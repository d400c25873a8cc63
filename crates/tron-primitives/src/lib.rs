//! # tron-primitives
//!
//! Primitive types for the Tron SDK.
//!
//! This crate provides the fixed-size values every other crate passes around:
//! the 21-byte network [`Address`], the 32-byte [`H256`] digest and the
//! 256-bit [`U256`] integer used for token amounts.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod hash;
mod error;

pub use address::{Address, AddressError};
pub use hash::{H256, HashError};
pub use error::PrimitiveError;

// Re-export primitive-types for U256
pub use primitive_types::U256;
