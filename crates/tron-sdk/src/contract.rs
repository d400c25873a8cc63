//! Contract ABI documents and call helpers

use serde::Deserialize;
use tracing::warn;
use tron_primitives::Address;

use crate::abi::{
    decode_parameters, encode_call, parse_type, AbiType, AbiValue, FunctionDescriptor,
    StateMutability,
};
use crate::{SdkConfig, SdkError};

/// Parsed ABI document: the functions a contract exposes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbiDocument {
    functions: Vec<FunctionDescriptor>,
}

/// One entry of a JSON ABI document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AbiEntry {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    inputs: Vec<AbiEntryParam>,
    #[serde(default)]
    outputs: Vec<AbiEntryParam>,
    #[serde(default)]
    state_mutability: Option<String>,
    #[serde(default)]
    constant: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct AbiEntryParam {
    #[serde(rename = "type")]
    kind: String,
}

/// The array itself, or a node `getcontract` response wrapping it
#[derive(Deserialize)]
#[serde(untagged)]
enum AbiJson {
    Entries(Vec<AbiEntry>),
    Wrapped { entrys: Vec<AbiEntry> },
}

impl AbiDocument {
    /// Build from function descriptors
    pub fn new(functions: Vec<FunctionDescriptor>) -> Self {
        Self { functions }
    }

    /// Parse a JSON ABI document
    ///
    /// Entries that are not functions (events, constructors, fallbacks) are
    /// left out. Functions using parameter types the codec does not handle
    /// are skipped with a warning.
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        let entries = match serde_json::from_str(json)? {
            AbiJson::Entries(entries) => entries,
            AbiJson::Wrapped { entrys } => entrys,
        };

        let mut functions = Vec::new();
        for entry in entries {
            // Nodes spell the type "Function"; an absent type means function
            let is_function = entry
                .kind
                .as_deref()
                .map_or(true, |kind| kind.eq_ignore_ascii_case("function"));
            if !is_function {
                continue;
            }
            let name = match entry.name {
                Some(name) => name,
                None => continue,
            };

            match (parse_params(&entry.inputs), parse_params(&entry.outputs)) {
                (Ok(inputs), Ok(outputs)) => {
                    let state_mutability = entry
                        .state_mutability
                        .as_deref()
                        .and_then(StateMutability::parse)
                        .unwrap_or(if entry.constant == Some(true) {
                            StateMutability::View
                        } else {
                            StateMutability::Nonpayable
                        });
                    functions.push(
                        FunctionDescriptor::new(name, inputs, outputs)
                            .with_mutability(state_mutability),
                    );
                }
                (Err(e), _) | (_, Err(e)) => {
                    warn!(function = %name, error = %e, "skipping function with unsupported types");
                }
            }
        }

        Ok(Self { functions })
    }

    /// Look up a function by name
    pub fn function(&self, name: &str) -> Result<&FunctionDescriptor, SdkError> {
        self.functions
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| SdkError::FunctionNotFound(name.to_string()))
    }

    /// All functions, in document order
    pub fn functions(&self) -> &[FunctionDescriptor] {
        &self.functions
    }
}

fn parse_params(params: &[AbiEntryParam]) -> Result<Vec<AbiType>, SdkError> {
    params.iter().map(|p| parse_type(&p.kind)).collect()
}

/// A deployed contract: its address and ABI
#[derive(Debug, Clone)]
pub struct Contract {
    address: Address,
    abi: AbiDocument,
}

impl Contract {
    /// Create a contract helper
    pub fn new(address: Address, abi: AbiDocument) -> Self {
        Self { address, abi }
    }

    /// Contract address
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Contract ABI
    pub fn abi(&self) -> &AbiDocument {
        &self.abi
    }

    /// Look up a function by name
    pub fn function(&self, name: &str) -> Result<&FunctionDescriptor, SdkError> {
        self.abi.function(name)
    }

    /// Encode a call: selector followed by parameters
    pub fn encode_call(&self, function_name: &str, args: &[AbiValue]) -> Result<Vec<u8>, SdkError> {
        encode_call(self.function(function_name)?, args)
    }

    /// Decode a function's hex return data
    pub fn decode_output(&self, function_name: &str, data: &str) -> Result<Vec<AbiValue>, SdkError> {
        decode_parameters(&self.function(function_name)?.outputs, data)
    }
}

/// Reject fee limits above the configured ceiling
pub fn check_fee_limit(fee_limit: u64, config: &SdkConfig) -> Result<(), SdkError> {
    if fee_limit > config.max_fee_limit {
        return Err(SdkError::FeeLimitExceeded {
            limit: fee_limit,
            max: config.max_fee_limit,
        });
    }
    Ok(())
}

/// The standard TRC20 token interface
pub fn trc20_abi() -> AbiDocument {
    use AbiType::{Address as Addr, Bool, String as Str, Uint};

    let view = |name: &str, inputs: Vec<AbiType>, outputs: Vec<AbiType>| {
        FunctionDescriptor::new(name, inputs, outputs).with_mutability(StateMutability::View)
    };

    AbiDocument::new(vec![
        view("name", vec![], vec![Str]),
        view("symbol", vec![], vec![Str]),
        view("decimals", vec![], vec![Uint(8)]),
        view("totalSupply", vec![], vec![Uint(256)]),
        view("balanceOf", vec![Addr], vec![Uint(256)]),
        FunctionDescriptor::new("transfer", vec![Addr, Uint(256)], vec![Bool]),
        FunctionDescriptor::new("approve", vec![Addr, Uint(256)], vec![Bool]),
        view("allowance", vec![Addr, Addr], vec![Uint(256)]),
        FunctionDescriptor::new("transferFrom", vec![Addr, Addr, Uint(256)], vec![Bool]),
    ])
}

/// Create a TRC20 token contract helper
pub fn trc20(address: Address) -> Contract {
    Contract::new(address, trc20_abi())
}
