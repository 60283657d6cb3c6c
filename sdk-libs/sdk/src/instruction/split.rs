use borsh::{BorshDeserialize, BorshSerialize};
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use super::{leading_account_metas, program_account_metas, LeafAuthorityAccounts};
use crate::{
    address::{find_tree_authority, CollectionAccounts},
    constants::SPLIT_DISCRIMINATOR,
    error::TinySplSdkError,
};

#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct SplitInstructionData {
    pub source_amount: u64,
    pub asset_id: [u8; 32],
    pub root: [u8; 32],
    /// Leaf index as the u64 nonce bubblegum hashes into the leaf.
    pub nonce: u64,
    /// Leaf index as the u32 index the compression program verifies against.
    pub index: u32,
    pub amounts: Vec<u64>,
}

impl SplitInstructionData {
    pub fn data(&self) -> Result<Vec<u8>, TinySplSdkError> {
        let mut data = SPLIT_DISCRIMINATOR.to_vec();
        data.extend(self.try_to_vec()?);
        Ok(data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAccounts {
    pub leaf_authority: LeafAuthorityAccounts,
    pub collection: CollectionAccounts,
    pub source_merkle_tree: Pubkey,
    /// Equal to `source_merkle_tree` unless new leaves are routed elsewhere.
    pub destination_merkle_tree: Pubkey,
}

impl SplitAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        let mut metas = leading_account_metas(&self.leaf_authority, &self.collection);
        metas.extend([
            AccountMeta::new(find_tree_authority(&self.source_merkle_tree).0, false),
            AccountMeta::new(self.source_merkle_tree, false),
            AccountMeta::new(find_tree_authority(&self.destination_merkle_tree).0, false),
            AccountMeta::new(self.destination_merkle_tree, false),
        ]);
        metas.extend(program_account_metas());
        metas
    }
}

/// Builds the `split` instruction. `proof_accounts` is the canopy-trimmed
/// proof of the source leaf.
pub fn create_split_instruction(
    program_id: &Pubkey,
    accounts: &SplitAccounts,
    data: &SplitInstructionData,
    proof_accounts: Vec<AccountMeta>,
) -> Result<Instruction, TinySplSdkError> {
    let mut metas = accounts.to_account_metas();
    metas.extend(proof_accounts);
    Ok(Instruction {
        program_id: *program_id,
        accounts: metas,
        data: data.data()?,
    })
}
