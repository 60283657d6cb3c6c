use solana_pubkey::Pubkey;

use crate::constants::{
    BUBBLEGUM_COLLECTION_CPI_SEED, EDITION_SEED, METADATA_SEED, PROGRAM_ID_BUBBLEGUM,
    PROGRAM_ID_TOKEN_METADATA, TINY_SPL_AUTHORITY_SEED,
};

pub fn find_tiny_spl_authority(program_id: &Pubkey, collection_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TINY_SPL_AUTHORITY_SEED, collection_mint.as_ref()],
        program_id,
    )
}

pub fn find_collection_metadata(collection_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            PROGRAM_ID_TOKEN_METADATA.as_ref(),
            collection_mint.as_ref(),
        ],
        &PROGRAM_ID_TOKEN_METADATA,
    )
}

pub fn find_collection_edition(collection_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            PROGRAM_ID_TOKEN_METADATA.as_ref(),
            collection_mint.as_ref(),
            EDITION_SEED,
        ],
        &PROGRAM_ID_TOKEN_METADATA,
    )
}

/// Bubblegum tree config account of `merkle_tree`.
pub fn find_tree_authority(merkle_tree: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[merkle_tree.as_ref()], &PROGRAM_ID_BUBBLEGUM)
}

pub fn find_bubblegum_signer() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BUBBLEGUM_COLLECTION_CPI_SEED], &PROGRAM_ID_BUBBLEGUM)
}

/// Program derived accounts which only depend on the collection a leaf
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionAccounts {
    pub collection_mint: Pubkey,
    pub collection_metadata: Pubkey,
    pub edition_account: Pubkey,
    pub tiny_spl_authority: Pubkey,
}

impl CollectionAccounts {
    pub fn derive(program_id: &Pubkey, collection_mint: &Pubkey) -> Self {
        Self {
            collection_mint: *collection_mint,
            collection_metadata: find_collection_metadata(collection_mint).0,
            edition_account: find_collection_edition(collection_mint).0,
            tiny_spl_authority: find_tiny_spl_authority(program_id, collection_mint).0,
        }
    }
}
