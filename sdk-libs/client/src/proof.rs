use std::collections::HashMap;

use futures::future::try_join_all;
use solana_instruction::AccountMeta;
use solana_pubkey::Pubkey;
use tiny_spl_sdk::instruction::proof_account_metas;
use tracing::{debug, trace};

use crate::{
    error::TransitionError,
    indexer::{Hash, InclusionProof, Indexer},
    rpc::{MerkleTreeExt, Rpc},
};

/// Drops the upper `canopy_depth` levels the tree account already caches.
pub fn trim_proof(proof_nodes: &[Hash], canopy_depth: u32) -> &[Hash] {
    let keep = proof_nodes.len().saturating_sub(canopy_depth as usize);
    &proof_nodes[..keep]
}

/// Exclusive end index of each segment once the segments are laid out back
/// to back.
pub fn proof_path_end_indexes(segment_lengths: impl IntoIterator<Item = usize>) -> Vec<u32> {
    segment_lengths
        .into_iter()
        .scan(0usize, |end, len| {
            *end += len;
            Some(*end as u32)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledProof {
    pub asset_id: Pubkey,
    pub proof: InclusionProof,
    pub canopy_depth: u32,
    pub trimmed_nodes: Vec<Pubkey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledProofs {
    /// In the order the asset ids were given.
    pub proofs: Vec<AssembledProof>,
    pub proof_path_end_indexes_exclusive: Vec<u32>,
}

impl AssembledProofs {
    pub fn proof_accounts(&self) -> Vec<AccountMeta> {
        let nodes: Vec<Pubkey> = self
            .proofs
            .iter()
            .flat_map(|proof| proof.trimmed_nodes.iter().copied())
            .collect();
        proof_account_metas(&nodes)
    }

    pub fn total_len(&self) -> usize {
        self.proofs.iter().map(|p| p.trimmed_nodes.len()).sum()
    }
}

/// Fetches fresh proofs for `asset_ids` concurrently, reads the canopy depth
/// of every distinct tree once and trims each proof against it.
pub async fn assemble_proofs<I: Indexer + ?Sized, R: Rpc>(
    indexer: &I,
    rpc: &R,
    asset_ids: &[Pubkey],
) -> Result<AssembledProofs, TransitionError> {
    let proofs = try_join_all(asset_ids.iter().map(|id| indexer.get_asset_proof(id))).await?;

    let mut trees: Vec<Pubkey> = Vec::new();
    for proof in &proofs {
        if !trees.contains(&proof.tree_id) {
            trees.push(proof.tree_id);
        }
    }
    let depths = try_join_all(trees.iter().map(|tree| rpc.get_canopy_depth(*tree))).await?;
    let canopy_depths: HashMap<Pubkey, u32> = trees.into_iter().zip(depths).collect();

    let proofs: Vec<AssembledProof> = asset_ids
        .iter()
        .zip(proofs)
        .map(|(asset_id, proof)| {
            let canopy_depth = canopy_depths.get(&proof.tree_id).copied().unwrap_or(0);
            let trimmed_nodes = trim_proof(&proof.proof_nodes, canopy_depth)
                .iter()
                .map(|node| Pubkey::new_from_array(*node))
                .collect::<Vec<_>>();
            trace!(
                "Proof of {}: {} nodes, canopy {}, {} kept",
                asset_id,
                proof.proof_nodes.len(),
                canopy_depth,
                trimmed_nodes.len()
            );
            AssembledProof {
                asset_id: *asset_id,
                proof,
                canopy_depth,
                trimmed_nodes,
            }
        })
        .collect();

    let proof_path_end_indexes_exclusive =
        proof_path_end_indexes(proofs.iter().map(|p| p.trimmed_nodes.len()));
    debug!(
        "Assembled {} proofs, end indexes {:?}",
        proofs.len(),
        proof_path_end_indexes_exclusive
    );

    Ok(AssembledProofs {
        proofs,
        proof_path_end_indexes_exclusive,
    })
}
