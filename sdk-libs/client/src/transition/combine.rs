use std::collections::HashSet;

use solana_pubkey::Pubkey;
use tiny_spl_sdk::{
    address::CollectionAccounts,
    instruction::{
        create_combine_instruction, CombineAccounts, CombineInstructionData,
        LeafAuthorityAccounts,
    },
};
use tracing::{info, warn};

use super::{
    compute_budget_instructions, leaf_index_u32, parse_leaf_amount, TransitionBuilder,
    TransitionInstructions,
};
use crate::{
    error::TransitionError,
    indexer::{Indexer, LeafAsset},
    proof::assemble_proofs,
    rpc::Rpc,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineRequest {
    pub owner: Pubkey,
    pub sources: Vec<LeafAsset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineSummary {
    pub collection_id: Pubkey,
    /// Tree holding every source leaf.
    pub merkle_tree: Pubkey,
    pub amounts: Vec<u64>,
    pub total: u64,
}

/// The first source's collection and tree are authoritative.
pub fn validate_combine_sources(sources: &[LeafAsset]) -> Result<CombineSummary, TransitionError> {
    let first = match sources {
        [first, _, ..] => first,
        _ => {
            return Err(TransitionError::InsufficientSources {
                found: sources.len(),
            })
        }
    };
    let collection_id = first
        .collection_id
        .ok_or(TransitionError::MissingCollection(first.id))?;

    let mut seen = HashSet::with_capacity(sources.len());
    let mut amounts = Vec::with_capacity(sources.len());
    let mut total = 0u64;
    for source in sources {
        if source.collection_id != Some(collection_id) {
            return Err(TransitionError::CollectionMismatch {
                expected: collection_id,
                found: source.collection_id,
            });
        }
        if source.tree_id != first.tree_id {
            return Err(TransitionError::TreeMismatch {
                asset: source.id,
                expected: first.tree_id,
                found: source.tree_id,
            });
        }
        if !seen.insert(source.id) {
            return Err(TransitionError::DuplicateAsset(source.id));
        }
        let amount = parse_leaf_amount(source)?;
        total = total
            .checked_add(amount)
            .ok_or(TransitionError::AmountOverflow)?;
        amounts.push(amount);
    }

    Ok(CombineSummary {
        collection_id,
        merkle_tree: first.tree_id,
        amounts,
        total,
    })
}

impl<I: Indexer + ?Sized, R: Rpc> TransitionBuilder<'_, I, R> {
    pub async fn build_combine(
        &self,
        request: &CombineRequest,
    ) -> Result<TransitionInstructions, TransitionError> {
        let summary = validate_combine_sources(&request.sources)?;
        let indexes = request
            .sources
            .iter()
            .map(leaf_index_u32)
            .collect::<Result<Vec<_>, _>>()?;
        let asset_ids: Vec<Pubkey> = request.sources.iter().map(|source| source.id).collect();

        let assembled = assemble_proofs(self.indexer, self.rpc, &asset_ids).await?;
        let merkle_tree = summary.merkle_tree;
        if let Some(moved) = assembled
            .proofs
            .iter()
            .find(|assembled| assembled.proof.tree_id != merkle_tree)
        {
            warn!(
                "Proof of {} is for tree {}, asset reported {}",
                moved.asset_id, moved.proof.tree_id, merkle_tree
            );
            return Err(TransitionError::TreeMismatch {
                asset: moved.asset_id,
                expected: merkle_tree,
                found: moved.proof.tree_id,
            });
        }

        let accounts = CombineAccounts {
            leaf_authority: LeafAuthorityAccounts::owner(request.owner),
            collection: CollectionAccounts::derive(&self.config.program_id, &summary.collection_id),
            merkle_tree,
        };
        let data = CombineInstructionData {
            amounts: summary.amounts.clone(),
            asset_ids: asset_ids.iter().map(|id| id.to_bytes()).collect(),
            roots: assembled.proofs.iter().map(|p| p.proof.root).collect(),
            nonces: request.sources.iter().map(|s| s.leaf_index).collect(),
            indexes,
            proof_path_end_indexes_exclusive: assembled.proof_path_end_indexes_exclusive.clone(),
        };
        let instruction = create_combine_instruction(
            &self.config.program_id,
            &accounts,
            &data,
            assembled.proof_accounts(),
        )?;

        info!(
            "Built combine of {} leaves of {} into {} with {} proof nodes",
            asset_ids.len(),
            summary.collection_id,
            summary.total,
            assembled.total_len()
        );

        let mut instructions = compute_budget_instructions(self.config).to_vec();
        instructions.push(instruction);
        Ok(TransitionInstructions {
            instructions,
            destination_amounts: vec![summary.total],
        })
    }
}
