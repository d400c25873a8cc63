//! # tron-sdk
//!
//! Rust SDK core for the Tron network.
//!
//! ## Features
//!
//! - **KeyManager / Account**: key generation and address derivation
//! - **Signer**: signing node-built transactions and checking signatures
//! - **ABI**: contract parameter encoding and decoding
//! - **Contract**: ABI documents and the TRC20 interface
//! - **Units / convert**: TRX and token amounts, hex field helpers
//!
//! Nothing here talks to a node. Requests are built and responses parsed by
//! the caller's transport; this crate produces and checks the bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use tron_sdk::{sign_transaction, verify_transaction, KeyManager, SdkConfig, Transaction};
//!
//! let mut keys = KeyManager::new(SdkConfig::default());
//! let account = keys.generate().unwrap();
//! assert_eq!(account.base58().len(), 34);
//!
//! let tx = Transaction::from_json(r#"{
//!     "txID": "9707028ef5b742d1f316f185622f8cd9397c332e9511c5ce72e50fc79f341d00",
//!     "raw_data": {},
//!     "raw_data_hex": "0a0100"
//! }"#).unwrap();
//!
//! let signed = sign_transaction(&tx, &account).unwrap();
//! assert!(verify_transaction(&signed, account.public_key().unwrap()).unwrap());
//! ```
//!
//! ## Contract Interaction
//!
//! ```rust
//! use tron_sdk::abi::AbiValue;
//! use tron_sdk::{contract, convert, Address};
//!
//! let token = Address::from_hex(&convert::to_hex("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t").unwrap()).unwrap();
//! let usdt = contract::trc20(token);
//!
//! let owner = Address::ZERO;
//! let call = usdt.encode_call("balanceOf", &[AbiValue::Address(owner)]).unwrap();
//! assert_eq!(&call[..4], &[0x70, 0xa0, 0x82, 0x31]);
//!
//! // constant_result[0] from the node
//! let balance = usdt.decode_output("balanceOf", &format!("{:064x}", 2_500_000)).unwrap();
//! assert_eq!(tron_sdk::units::format_units(&balance[0].as_uint().unwrap(), 6).unwrap(), "2.5");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod abi;
mod config;
pub mod contract;
pub mod convert;
mod error;
mod signer;
mod transaction;
pub mod units;
mod wallet;

pub use config::SdkConfig;
pub use error::SdkError;
pub use signer::{recover_signer, recover_signers, sign_transaction, verify_transaction};
pub use transaction::Transaction;
pub use wallet::{Account, KeyManager};

// Re-export primitives for convenience
pub use tron_crypto::{PrivateKey, PublicKey, Signature};
pub use tron_primitives::{Address, H256, U256};
