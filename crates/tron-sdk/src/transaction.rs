//! Transaction model
//!
//! Transactions arrive from a node as JSON. Only the fields signing needs are
//! typed; `raw_data` and any other node fields are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tron_crypto::sha256;
use tron_primitives::H256;

use crate::SdkError;

/// A node-built transaction, signed or unsigned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id: sha256 of the serialized raw data, as hex
    #[serde(rename = "txID", default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    /// Raw transaction body, opaque to the SDK
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub raw_data: Value,
    /// Serialized raw data, as hex
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_data_hex: Option<String>,
    /// Hex signatures (130 characters each)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signature: Vec<String>,
    /// Other node fields (e.g. `visible`)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transaction {
    /// Parse from node JSON
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render as node JSON
    pub fn to_json(&self) -> Result<String, SdkError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Whether any signature is attached
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }

    /// The txID as a 32-byte hash
    pub fn tx_hash(&self) -> Result<H256, SdkError> {
        let tx_id = self
            .tx_id
            .as_deref()
            .ok_or_else(|| SdkError::MalformedTransaction("missing txID".to_string()))?;
        H256::from_hex(tx_id).map_err(|e| {
            SdkError::MalformedTransaction(format!("txID is not a 32-byte hex hash: {}", e))
        })
    }

    /// Check `txID == sha256(raw_data_hex)`
    ///
    /// Returns `Ok(None)` when the node did not supply `raw_data_hex`.
    pub fn tx_id_matches_raw_data(&self) -> Result<Option<bool>, SdkError> {
        let raw_hex = match &self.raw_data_hex {
            Some(raw_hex) => raw_hex,
            None => return Ok(None),
        };
        let raw = hex::decode(raw_hex.strip_prefix("0x").unwrap_or(raw_hex)).map_err(|e| {
            SdkError::MalformedTransaction(format!("raw_data_hex is not hex: {}", e))
        })?;
        Ok(Some(sha256(&raw) == self.tx_hash()?))
    }
}
