//! Split and combine builders.
//!
//! Both validate their request locally before the first request is made,
//! then fetch fresh proofs, derive the collection accounts and emit the
//! compute budget instructions followed by the Tiny SPL instruction.

mod combine;
mod split;

pub use combine::*;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
pub use split::*;

use crate::{
    config::TinySplConfig,
    error::TransitionError,
    indexer::{Indexer, IndexerError, LeafAsset},
    rpc::Rpc,
    transaction::{build_transaction, BuiltTransaction},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionRequest {
    Split(SplitRequest),
    Combine(CombineRequest),
}

impl TransitionRequest {
    /// Signer, fee payer and owner of the resulting leaves.
    pub fn owner(&self) -> Pubkey {
        match self {
            TransitionRequest::Split(request) => request.owner,
            TransitionRequest::Combine(request) => request.owner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionInstructions {
    pub instructions: Vec<Instruction>,
    /// Amounts of the leaves the transition mints.
    pub destination_amounts: Vec<u64>,
}

/// Priority fee first, then the compute unit limit.
pub fn compute_budget_instructions(config: &TinySplConfig) -> [Instruction; 2] {
    [
        ComputeBudgetInstruction::set_compute_unit_price(config.compute_unit_price_micro_lamports),
        ComputeBudgetInstruction::set_compute_unit_limit(config.compute_unit_limit),
    ]
}

pub fn parse_leaf_amount(asset: &LeafAsset) -> Result<u64, TransitionError> {
    asset
        .amount
        .parse::<u64>()
        .map_err(|_| TransitionError::InvalidAmount {
            asset: asset.id,
            value: asset.amount.clone(),
        })
}

fn leaf_index_u32(asset: &LeafAsset) -> Result<u32, TransitionError> {
    u32::try_from(asset.leaf_index).map_err(|_| {
        TransitionError::Indexer(IndexerError::InvalidResponseData(format!(
            "leaf index {} of {} does not fit u32",
            asset.leaf_index, asset.id
        )))
    })
}

pub struct TransitionBuilder<'a, I: ?Sized, R> {
    indexer: &'a I,
    rpc: &'a R,
    config: &'a TinySplConfig,
}

impl<'a, I: Indexer + ?Sized, R: Rpc> TransitionBuilder<'a, I, R> {
    pub fn new(indexer: &'a I, rpc: &'a R, config: &'a TinySplConfig) -> Self {
        Self {
            indexer,
            rpc,
            config,
        }
    }

    pub async fn build_instructions(
        &self,
        request: &TransitionRequest,
    ) -> Result<TransitionInstructions, TransitionError> {
        match request {
            TransitionRequest::Split(request) => self.build_split(request).await,
            TransitionRequest::Combine(request) => self.build_combine(request).await,
        }
    }

    /// Builds the unsigned transaction paid by the request's owner.
    pub async fn build_transaction(
        &self,
        request: &TransitionRequest,
    ) -> Result<BuiltTransaction, TransitionError> {
        let built = self.build_instructions(request).await?;
        build_transaction(
            self.rpc,
            &request.owner(),
            &built.instructions,
            self.config.lookup_table,
        )
        .await
    }
}
