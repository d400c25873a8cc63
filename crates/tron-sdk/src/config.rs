//! SDK configuration
//!
//! Loaded from TOML; every field has a default so a partial (or empty)
//! document is valid. The value is passed explicitly to the components that
//! read it.

use serde::{Deserialize, Serialize};

use crate::units::MAX_DECIMALS;
use crate::SdkError;

/// SDK configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Total key generation attempts before giving up
    #[serde(default = "default_max_keygen_attempts")]
    pub max_keygen_attempts: u32,
    /// Largest fee limit accepted for contract triggers, in sun
    #[serde(default = "default_max_fee_limit")]
    pub max_fee_limit: u64,
    /// Decimals assumed for token amounts when the contract is not consulted
    /// (read by [`crate::units::to_token_units`] and [`crate::units::format_token_units`])
    #[serde(default = "default_token_decimals")]
    pub default_token_decimals: u32,
}

fn default_max_keygen_attempts() -> u32 {
    5
}

fn default_max_fee_limit() -> u64 {
    1_000_000_000
}

fn default_token_decimals() -> u32 {
    6
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            max_keygen_attempts: default_max_keygen_attempts(),
            max_fee_limit: default_max_fee_limit(),
            default_token_decimals: default_token_decimals(),
        }
    }
}

impl SdkConfig {
    /// Parse from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, SdkError> {
        let config: SdkConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String, SdkError> {
        toml::to_string(self).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Reject values no component can work with
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.max_keygen_attempts == 0 {
            return Err(SdkError::Config(
                "max_keygen_attempts must be at least 1".to_string(),
            ));
        }
        if self.default_token_decimals > MAX_DECIMALS {
            return Err(SdkError::Config(format!(
                "default_token_decimals {} exceeds {}",
                self.default_token_decimals, MAX_DECIMALS
            )));
        }
        Ok(())
    }
}
