//! Cryptographic errors

use thiserror::Error;

/// Cryptographic operation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Base outside the supported range
    #[error("invalid base: {0} (expected 2..=256)")]
    InvalidBase(u32),

    /// Alphabet too short for the requested base
    #[error("alphabet has {len} symbols, base {base} needs at least that many")]
    InvalidAlphabet {
        /// Requested base
        base: u32,
        /// Number of symbols supplied
        len: usize,
    },

    /// Symbol not present in the alphabet
    #[error("invalid digit {digit:#04x} at position {position}")]
    InvalidDigit {
        /// Offending byte
        digit: u8,
        /// Index in the input
        position: usize,
    },

    /// Input has the wrong byte length
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// Public key is not a 64/65-byte secp256k1 point
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Invalid private key
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// Signing failed
    #[error("signing failed: {0}")]
    SigningFailed(String),

    /// Invalid signature
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Invalid recovery ID
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Recovery failed
    #[error("public key recovery failed: {0}")]
    RecoveryFailed(String),
}
