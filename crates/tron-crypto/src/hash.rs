//! Hash functions: SHA-256, double SHA-256, RIPEMD-160 and Keccak-256

use ripemd::Ripemd160;
use sha2::Sha256;
use sha3::{Digest, Keccak256};
use tron_primitives::H256;

/// Compute SHA-256 hash of the input data
pub fn sha256(data: &[u8]) -> H256 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    H256::from_bytes(hasher.finalize().into())
}

/// SHA-256 applied twice; the Base58Check checksum source
pub fn sha256d(data: &[u8]) -> H256 {
    sha256(sha256(data).as_bytes())
}

/// Compute RIPEMD-160 hash of the input data
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute Keccak-256 hash of the input data
pub fn keccak256(data: &[u8]) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    H256::from_bytes(result.into())
}
