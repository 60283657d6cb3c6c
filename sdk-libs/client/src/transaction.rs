use solana_address_lookup_table_interface::state::AddressLookupTable;
use solana_hash::Hash;
use solana_instruction::Instruction;
use solana_message::{v0, AddressLookupTableAccount, VersionedMessage};
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction::versioned::VersionedTransaction;
use tracing::debug;

use crate::{
    error::TransitionError,
    rpc::{Rpc, RpcError},
};

/// An unsigned transaction and the blockhash window it is valid in.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltTransaction {
    /// Carries one default signature per required signer.
    pub transaction: VersionedTransaction,
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
}

pub async fn fetch_lookup_table<R: Rpc>(
    rpc: &R,
    key: Pubkey,
) -> Result<AddressLookupTableAccount, RpcError> {
    let account = rpc
        .get_account(key)
        .await?
        .ok_or(RpcError::AccountNotFound(key))?;
    let table = AddressLookupTable::deserialize(&account.data).map_err(|e| {
        RpcError::CustomError(format!("Invalid address lookup table {}: {}", key, e))
    })?;
    Ok(AddressLookupTableAccount {
        key,
        addresses: table.addresses.to_vec(),
    })
}

/// Compiles `instructions` into a v0 message paid by `payer`. The blockhash is
/// fetched last so it is as fresh as possible.
pub async fn build_transaction<R: Rpc>(
    rpc: &R,
    payer: &Pubkey,
    instructions: &[Instruction],
    lookup_table: Option<Pubkey>,
) -> Result<BuiltTransaction, TransitionError> {
    let lookup_tables = match lookup_table {
        Some(key) => vec![fetch_lookup_table(rpc, key).await?],
        None => Vec::new(),
    };
    let (blockhash, last_valid_block_height) = rpc.get_latest_blockhash().await?;

    let message = v0::Message::try_compile(payer, instructions, &lookup_tables, blockhash)
        .map_err(|e| TransitionError::Compile(e.to_string()))?;
    let message = VersionedMessage::V0(message);
    let num_signatures = message.header().num_required_signatures as usize;
    debug!(
        "Compiled v0 message: {} instructions, {} lookup tables, blockhash {}",
        instructions.len(),
        lookup_tables.len(),
        blockhash
    );

    Ok(BuiltTransaction {
        transaction: VersionedTransaction {
            signatures: vec![Signature::default(); num_signatures],
            message,
        },
        blockhash,
        last_valid_block_height,
    })
}
