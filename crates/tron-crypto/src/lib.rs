//! # tron-crypto
//!
//! Cryptographic primitives for the Tron SDK.
//!
//! - SHA-256, double SHA-256, RIPEMD-160 and Keccak-256 hashing
//! - Arbitrary-precision base conversion (bases 2 to 256)
//! - Base58 and Base58Check text encoding
//! - Address derivation and validation
//! - ECDSA signing/verification and public key recovery (secp256k1)
//!
//! Everything here is a pure function over its inputs. Alphabets, prefixes and
//! keys are always passed in; nothing is configured process-wide.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod base;
pub mod base58;
pub mod base58check;
mod error;
mod hash;
mod signature;

pub use address::{base58_to_hex, hex_to_base58, is_valid, pub_key_to_address, public_key_to_address};
pub use error::CryptoError;
pub use hash::{keccak256, ripemd160, sha256, sha256d};
pub use signature::{
    private_key_from_bytes, public_key_to_bytes, recover_public_key, sign, verify,
    PrivateKey, PublicKey, Signature, SIGNATURE_LENGTH,
};
