mod combine;
mod split;

pub use combine::*;
pub use split::*;
use solana_instruction::AccountMeta;
use solana_pubkey::Pubkey;

use crate::{
    address::{find_bubblegum_signer, CollectionAccounts},
    constants::{
        PROGRAM_ID_ACCOUNT_COMPRESSION, PROGRAM_ID_BUBBLEGUM, PROGRAM_ID_NOOP, PROGRAM_ID_SYSTEM,
        PROGRAM_ID_TOKEN_METADATA,
    },
};

/// Signer side accounts shared by `split` and `combine`. The leaf owner
/// signs, delegates for itself and receives the new leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafAuthorityAccounts {
    pub authority: Pubkey,
    pub leaf_owner: Pubkey,
    pub leaf_delegate: Pubkey,
    pub new_leaf_owner: Pubkey,
}

impl LeafAuthorityAccounts {
    pub fn owner(owner: Pubkey) -> Self {
        Self {
            authority: owner,
            leaf_owner: owner,
            leaf_delegate: owner,
            new_leaf_owner: owner,
        }
    }
}

/// Proof nodes are passed as read-only remaining accounts.
pub fn proof_account_metas(nodes: &[Pubkey]) -> Vec<AccountMeta> {
    nodes
        .iter()
        .map(|node| AccountMeta::new_readonly(*node, false))
        .collect()
}

fn leading_account_metas(
    leaf_authority: &LeafAuthorityAccounts,
    collection: &CollectionAccounts,
) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(leaf_authority.authority, true),
        // tree_creator_or_delegate
        AccountMeta::new_readonly(collection.tiny_spl_authority, false),
        AccountMeta::new_readonly(leaf_authority.leaf_owner, false),
        AccountMeta::new_readonly(leaf_authority.leaf_delegate, false),
        AccountMeta::new_readonly(leaf_authority.new_leaf_owner, false),
        AccountMeta::new_readonly(collection.collection_mint, false),
        AccountMeta::new(collection.collection_metadata, false),
        AccountMeta::new_readonly(collection.edition_account, false),
        AccountMeta::new_readonly(find_bubblegum_signer().0, false),
        AccountMeta::new_readonly(collection.tiny_spl_authority, false),
    ]
}

fn program_account_metas() -> [AccountMeta; 5] {
    [
        AccountMeta::new_readonly(PROGRAM_ID_NOOP, false),
        AccountMeta::new_readonly(PROGRAM_ID_ACCOUNT_COMPRESSION, false),
        AccountMeta::new_readonly(PROGRAM_ID_TOKEN_METADATA, false),
        AccountMeta::new_readonly(PROGRAM_ID_SYSTEM, false),
        AccountMeta::new_readonly(PROGRAM_ID_BUBBLEGUM, false),
    ]
}
