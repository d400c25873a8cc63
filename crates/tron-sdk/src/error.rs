//! SDK error types

use thiserror::Error;

/// SDK error type
///
/// Messages never include private key material, only lengths and positions.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Invalid hex string
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Invalid address format
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Invalid private key
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Every key generation attempt produced an invalid address
    #[error("Key generation failed after {attempts} attempts")]
    KeyGeneration {
        /// Attempts made
        attempts: u32,
    },

    /// Signing requested from an account without a private key
    #[error("Missing private key")]
    MissingKey,

    /// Transaction already carries a signature
    #[error("Transaction is already signed")]
    AlreadySigned,

    /// Transaction lacks a usable txID
    #[error("Malformed transaction: {0}")]
    MalformedTransaction(String),

    /// Argument count does not match the function's inputs
    #[error("Expected {expected} parameters, got {got}")]
    ParameterCount {
        /// Inputs declared by the function
        expected: usize,
        /// Values supplied
        got: usize,
    },

    /// Function name absent from the ABI document
    #[error("Function {0} not defined in ABI")]
    FunctionNotFound(String),

    /// ABI encoding error
    #[error("ABI encoding error: {0}")]
    AbiEncode(String),

    /// ABI decoding error
    #[error("ABI decoding error: {0}")]
    AbiDecode(String),

    /// Amount string could not be converted
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Fee limit above the configured ceiling
    #[error("Fee limit {limit} exceeds maximum {max}")]
    FeeLimitExceeded {
        /// Requested limit in sun
        limit: u64,
        /// Configured ceiling in sun
        max: u64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Underlying cryptographic failure
    #[error("Crypto error: {0}")]
    Crypto(#[from] tron_crypto::CryptoError),
}

impl From<hex::FromHexError> for SdkError {
    fn from(e: hex::FromHexError) -> Self {
        SdkError::InvalidHex(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for SdkError {
    fn from(e: toml::de::Error) -> Self {
        SdkError::Config(e.to_string())
    }
}

impl From<tron_primitives::AddressError> for SdkError {
    fn from(e: tron_primitives::AddressError) -> Self {
        SdkError::InvalidAddress(e.to_string())
    }
}

impl From<tron_primitives::PrimitiveError> for SdkError {
    fn from(e: tron_primitives::PrimitiveError) -> Self {
        SdkError::InvalidAddress(e.to_string())
    }
}
