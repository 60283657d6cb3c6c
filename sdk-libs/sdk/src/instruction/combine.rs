use borsh::{BorshDeserialize, BorshSerialize};
use solana_instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use super::{leading_account_metas, program_account_metas, LeafAuthorityAccounts};
use crate::{
    address::{find_tree_authority, CollectionAccounts},
    constants::COMBINE_DISCRIMINATOR,
    error::TinySplSdkError,
};

/// Per source vectors are index aligned. `proof_path_end_indexes_exclusive`
/// slices the remaining accounts back into one proof per source.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct CombineInstructionData {
    pub amounts: Vec<u64>,
    pub asset_ids: Vec<[u8; 32]>,
    pub roots: Vec<[u8; 32]>,
    pub nonces: Vec<u64>,
    pub indexes: Vec<u32>,
    pub proof_path_end_indexes_exclusive: Vec<u32>,
}

impl CombineInstructionData {
    pub fn data(&self) -> Result<Vec<u8>, TinySplSdkError> {
        let mut data = COMBINE_DISCRIMINATOR.to_vec();
        data.extend(self.try_to_vec()?);
        Ok(data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineAccounts {
    pub leaf_authority: LeafAuthorityAccounts,
    pub collection: CollectionAccounts,
    pub merkle_tree: Pubkey,
}

impl CombineAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        let mut metas = leading_account_metas(&self.leaf_authority, &self.collection);
        metas.extend([
            AccountMeta::new(find_tree_authority(&self.merkle_tree).0, false),
            AccountMeta::new(self.merkle_tree, false),
        ]);
        metas.extend(program_account_metas());
        metas
    }
}

/// Builds the `combine` instruction. `proof_accounts` holds every source's
/// trimmed proof back to back, in source order.
pub fn create_combine_instruction(
    program_id: &Pubkey,
    accounts: &CombineAccounts,
    data: &CombineInstructionData,
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
