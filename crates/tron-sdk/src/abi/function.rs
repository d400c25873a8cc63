//! Function descriptors

use std::fmt;

use super::encode::function_selector;
use super::types::AbiType;

/// How a function interacts with contract state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateMutability {
    /// Reads nothing from state
    Pure,
    /// Reads but does not modify state
    View,
    /// Modifies state, rejects call value
    #[default]
    Nonpayable,
    /// Modifies state, accepts call value
    Payable,
}

impl StateMutability {
    /// Parse the ABI document's spelling, in any case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pure" => Some(StateMutability::Pure),
            "view" => Some(StateMutability::View),
            "nonpayable" => Some(StateMutability::Nonpayable),
            "payable" => Some(StateMutability::Payable),
            _ => None,
        }
    }
}

/// A callable contract function: name, parameter types and return types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDescriptor {
    /// Function name
    pub name: String,
    /// Input parameter types
    pub inputs: Vec<AbiType>,
    /// Output parameter types
    pub outputs: Vec<AbiType>,
    /// State mutability
    pub state_mutability: StateMutability,
}

impl FunctionDescriptor {
    /// Create a non-payable function
    pub fn new(name: impl Into<String>, inputs: Vec<AbiType>, outputs: Vec<AbiType>) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs,
            state_mutability: StateMutability::default(),
        }
    }

    /// Set the state mutability
    pub fn with_mutability(mut self, state_mutability: StateMutability) -> Self {
        self.state_mutability = state_mutability;
        self
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub fn signature(&self) -> String {
        let inputs: Vec<String> = self.inputs.iter().map(|t| t.to_string()).collect();
        format!("{}({})", self.name, inputs.join(","))
    }

    /// First 4 bytes of keccak256 of the signature
    pub fn selector(&self) -> [u8; 4] {
        function_selector(&self.signature())
    }

    /// Whether the function can be evaluated without a transaction
    pub fn is_constant(&self) -> bool {
        matches!(
            self.state_mutability,
            StateMutability::Pure | StateMutability::View
        )
    }
}

impl fmt::Display for FunctionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature() {
        let function = FunctionDescriptor::new(
            "transferFrom",
            vec![AbiType::Address, AbiType::Address, AbiType::Uint(256)],
            vec![AbiType::Bool],
        );
        assert_eq!(function.signature(), "transferFrom(address,address,uint256)");
        assert_eq!(function.selector(), [0x23, 0xb8, 0x72, 0xdd]);
    }

    #[test]
    fn test_signature_no_inputs() {
        let function = FunctionDescriptor::new("totalSupply", vec![], vec![AbiType::Uint(256)]);
        assert_eq!(function.signature(), "totalSupply()");
        assert_eq!(function.selector(), [0x18, 0x16, 0x0d, 0xdd]);
    }

    #[test]
    fn test_state_mutability_parse() {
        assert_eq!(StateMutability::parse("View"), Some(StateMutability::View));
        assert_eq!(StateMutability::parse("nonpayable"), Some(StateMutability::Nonpayable));
        assert_eq!(StateMutability::parse("Payable"), Some(StateMutability::Payable));
        assert_eq!(StateMutability::parse("sometimes"), None);
    }

    #[test]
    fn test_is_constant() {
        let function = FunctionDescriptor::new("name", vec![], vec![AbiType::String]);
        assert!(!function.is_constant());
        assert!(function.with_mutability(StateMutability::View).is_constant());
    }
}
