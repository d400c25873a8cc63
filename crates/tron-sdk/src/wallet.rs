//! Key generation and account management

use k256::ecdsa::SigningKey;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use tron_crypto::{
    hex_to_base58, is_valid, public_key_to_address, public_key_to_bytes, PrivateKey, PublicKey,
};
use tron_primitives::Address;
use zeroize::{Zeroize, Zeroizing};

use crate::{SdkConfig, SdkError};

/// A network account: address, its base58 text and (optionally) the keys behind it
///
/// Clone is not implemented so private keys are never duplicated implicitly.
/// Build another account from the same key with [`Account::from_private_key`].
pub struct Account {
    address: Address,
    base58: String,
    public_key: Option<PublicKey>,
    private_key: Option<PrivateKey>,
}

impl Account {
    /// Account owning the given private key
    pub fn from_private_key(key: &[u8; 32]) -> Result<Self, SdkError> {
        let private_key = SigningKey::from_slice(key)
            .map_err(|_| SdkError::InvalidPrivateKey("scalar out of range".to_string()))?;
        Ok(Self::from_signing_key(private_key))
    }

    /// Account from a hex private key, with or without `0x`
    pub fn from_private_key_hex(hex: &str) -> Result<Self, SdkError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let mut bytes = hex::decode(hex)
            .map_err(|_| SdkError::InvalidPrivateKey("not valid hex".to_string()))?;
        if bytes.len() != 32 {
            let len = bytes.len();
            bytes.zeroize();
            return Err(SdkError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                len
            )));
        }

        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes);
        bytes.zeroize();

        let result = Self::from_private_key(&key);
        key.zeroize();
        result
    }

    /// Key-less account for an address known only by value
    pub fn watch_only(address: Address) -> Self {
        Self {
            base58: hex_to_base58(&address),
            address,
            public_key: None,
            private_key: None,
        }
    }

    /// Key-less account from base58 text; the checksum must match
    pub fn from_base58(text: &str) -> Result<Self, SdkError> {
        if !is_valid(text)? {
            return Err(SdkError::InvalidAddress(format!(
                "{} is not a valid base58 address",
                text
            )));
        }
        let address = tron_crypto::base58_to_hex(text)?;
        Ok(Self::watch_only(address))
    }

    fn from_signing_key(private_key: SigningKey) -> Self {
        let public_key = *private_key.verifying_key();
        let address = public_key_to_address(&public_key);
        Self {
            base58: hex_to_base58(&address),
            address,
            public_key: Some(public_key),
            private_key: Some(private_key),
        }
    }

    /// The account's address
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Address as 42 hex characters starting with `41`
    pub fn hex(&self) -> String {
        self.address.to_hex()
    }

    /// Address as 34-character base58 text
    pub fn base58(&self) -> &str {
        &self.base58
    }

    /// Public key, when the account was built from a private key
    pub fn public_key(&self) -> Option<&PublicKey> {
        self.public_key.as_ref()
    }

    /// Uncompressed public key bytes (`0x04 || X || Y`)
    pub fn public_key_bytes(&self) -> Option<[u8; 65]> {
        self.public_key.as_ref().map(public_key_to_bytes)
    }

    /// Whether this account can sign
    pub fn has_private_key(&self) -> bool {
        self.private_key.is_some()
    }

    /// Private key as 64 hex characters, wiped from memory on drop
    pub fn export_private_key_hex(&self) -> Option<Zeroizing<String>> {
        self.private_key.as_ref().map(|key| {
            let mut bytes: [u8; 32] = key.to_bytes().into();
            let hex = Zeroizing::new(hex::encode(bytes));
            bytes.zeroize();
            hex
        })
    }

    pub(crate) fn private_key(&self) -> Option<&PrivateKey> {
        self.private_key.as_ref()
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .field("base58", &self.base58)
            .field("has_private_key", &self.private_key.is_some())
            .finish()
    }
}

/// Generates fresh accounts
///
/// Each generated address is checked with the same validator callers use on
/// untrusted input. Generation retries a bounded number of times and then
/// fails with [`SdkError::KeyGeneration`].
pub struct KeyManager<R = OsRng> {
    config: SdkConfig,
    rng: R,
}

impl KeyManager<OsRng> {
    /// Key manager drawing from the operating system's CSPRNG
    pub fn new(config: SdkConfig) -> Self {
        Self { config, rng: OsRng }
    }
}

impl Default for KeyManager<OsRng> {
    fn default() -> Self {
        Self::new(SdkConfig::default())
    }
}

impl<R: CryptoRng + RngCore> KeyManager<R> {
    /// Key manager drawing from a caller-provided CSPRNG
    pub fn with_rng(config: SdkConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Generate a new account
    pub fn generate(&mut self) -> Result<Account, SdkError> {
        self.generate_with(|account| is_valid(account.base58()).unwrap_or(false))
    }

    /// Generation loop with the address check supplied by the caller
    fn generate_with<F>(&mut self, mut accept: F) -> Result<Account, SdkError>
    where
        F: FnMut(&Account) -> bool,
    {
        let attempts = self.config.max_keygen_attempts;
        for attempt in 1..=attempts {
            let account = Account::from_signing_key(SigningKey::random(&mut self.rng));
            if accept(&account) {
                debug!(attempt, address = %account.base58(), "generated account");
                return Ok(account);
            }
            warn!(
                attempt,
                max_attempts = attempts,
                "generated address failed validation, retrying"
            );
        }
        Err(SdkError::KeyGeneration { attempts })
    }

    /// Active configuration
    pub fn config(&self) -> &SdkConfig {
        &self.config
    }
}
