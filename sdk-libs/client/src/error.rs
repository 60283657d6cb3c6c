use solana_pubkey::Pubkey;
use thiserror::Error;

use crate::{indexer::IndexerError, rpc::RpcError};

/// Errors of the balance classifier and the split/combine builders. Every
/// variant above `Indexer` is raised before any request is made.
#[derive(Error, Debug)]
pub enum TransitionError {
    #[error("Invalid split amounts: {0}")]
    InvalidSplitAmounts(String),

    #[error("Collection mismatch: expected {expected}, found {found:?}")]
    CollectionMismatch {
        expected: Pubkey,
        found: Option<Pubkey>,
    },

    #[error("Asset {asset} is in tree {found}, expected {expected}")]
    TreeMismatch {
        asset: Pubkey,
        expected: Pubkey,
        found: Pubkey,
    },

    #[error("Asset {0} is included more than once")]
    DuplicateAsset(Pubkey),

    #[error("Combine needs at least 2 source leaves, found {found}")]
    InsufficientSources { found: usize },

    #[error("Asset {0} has no collection")]
    MissingCollection(Pubkey),

    #[error("Asset {asset} has invalid amount {value:?}")]
    InvalidAmount { asset: Pubkey, value: String },

    #[error("Amount overflow")]
    AmountOverflow,

    #[error(transparent)]
    Indexer(#[from] IndexerError),

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("Failed to compile transaction message: {0}")]
    Compile(String),
}

impl From<tiny_spl_sdk::TinySplSdkError> for TransitionError {
    fn from(err: tiny_spl_sdk::TinySplSdkError) -> Self {
        TransitionError::Rpc(RpcError::Sdk(err))
    }
}
