//! Transaction signing and signature checks

use tracing::debug;
use tron_crypto::{public_key_to_address, recover_public_key, sign, verify, PublicKey, Signature};
use tron_primitives::{Address, H256};

use crate::{Account, SdkError, Transaction};

/// Sign a transaction's txID with the account's key
///
/// Returns a new transaction carrying exactly one signature: 65 bytes
/// `r || s || v` (v = recovery id 0/1) as 130 hex characters. The input is
/// left untouched.
pub fn sign_transaction(tx: &Transaction, account: &Account) -> Result<Transaction, SdkError> {
    let private_key = account.private_key().ok_or(SdkError::MissingKey)?;

    if tx.is_signed() {
        return Err(SdkError::AlreadySigned);
    }
    if let Some(error) = tx.extra.get("Error") {
        return Err(SdkError::MalformedTransaction(format!(
            "node returned an error: {}",
            error
        )));
    }

    let digest = tx.tx_hash()?;
    let signature = sign(&digest, private_key)?;
    debug!(tx_id = %digest, signer = %account.base58(), "signed transaction");

    let mut signed = tx.clone();
    signed.signature = vec![signature.to_hex()];
    Ok(signed)
}

/// Whether any attached signature was made by `public_key`
///
/// An unsigned transaction verifies as `false`.
pub fn verify_transaction(tx: &Transaction, public_key: &PublicKey) -> Result<bool, SdkError> {
    let digest = tx.tx_hash()?;
    for signature in parse_signatures(tx)? {
        if verify(&digest, &signature, public_key)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Address of the first signer
pub fn recover_signer(tx: &Transaction) -> Result<Address, SdkError> {
    recover_signers(tx)?
        .into_iter()
        .next()
        .ok_or_else(|| SdkError::MalformedTransaction("transaction is not signed".to_string()))
}

/// Addresses of every signer, in signature order
pub fn recover_signers(tx: &Transaction) -> Result<Vec<Address>, SdkError> {
    let digest = tx.tx_hash()?;
    parse_signatures(tx)?
        .iter()
        .map(|signature| recover_address(&digest, signature))
        .collect()
}

fn recover_address(digest: &H256, signature: &Signature) -> Result<Address, SdkError> {
    let public_key = recover_public_key(digest, signature)?;
    Ok(public_key_to_address(&public_key))
}

fn parse_signatures(tx: &Transaction) -> Result<Vec<Signature>, SdkError> {
    tx.signature
        .iter()
        .map(|hex| Signature::from_hex(hex).map_err(SdkError::from))
        .collect()
}
