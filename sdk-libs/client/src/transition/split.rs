use solana_pubkey::Pubkey;
use tiny_spl_sdk::{
    address::CollectionAccounts,
    instruction::{
        create_split_instruction, LeafAuthorityAccounts, SplitAccounts, SplitInstructionData,
    },
};
use tracing::info;

use super::{
    compute_budget_instructions, leaf_index_u32, parse_leaf_amount, TransitionBuilder,
    TransitionInstructions,
};
use crate::{
    config::SplitPolicy,
    error::TransitionError,
    indexer::{Indexer, IndexerError, LeafAsset},
    proof::assemble_proofs,
    rpc::Rpc,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRequest {
    pub owner: Pubkey,
    pub source: LeafAsset,
    pub destination_amounts: Vec<u64>,
}

/// At least two destinations, each at or above the policy minimum and never
/// zero, summing exactly to `source_amount`.
pub fn validate_split_amounts(
    source_amount: u64,
    destination_amounts: &[u64],
    policy: &SplitPolicy,
) -> Result<(), TransitionError> {
    if destination_amounts.len() < 2 {
        return Err(TransitionError::InvalidSplitAmounts(format!(
            "at least 2 destination amounts required, got {}",
            destination_amounts.len()
        )));
    }
    let min = policy.min_destination_amount.max(1);
    if let Some(amount) = destination_amounts.iter().find(|amount| **amount < min) {
        return Err(TransitionError::InvalidSplitAmounts(format!(
            "destination amount {} is below the minimum of {}",
            amount, min
        )));
    }
    let sum = destination_amounts
        .iter()
        .try_fold(0u64, |sum, amount| sum.checked_add(*amount))
        .ok_or_else(|| {
            TransitionError::InvalidSplitAmounts("destination amounts overflow".to_string())
        })?;
    if sum != source_amount {
        return Err(TransitionError::InvalidSplitAmounts(format!(
            "destination amounts sum to {}, source amount is {}",
            sum, source_amount
        )));
    }
    Ok(())
}

impl<I: Indexer + ?Sized, R: Rpc> TransitionBuilder<'_, I, R> {
    pub async fn build_split(
        &self,
        request: &SplitRequest,
    ) -> Result<TransitionInstructions, TransitionError> {
        let source = &request.source;
        let source_amount = parse_leaf_amount(source)?;
        validate_split_amounts(
            source_amount,
            &request.destination_amounts,
            &self.config.split_policy,
        )?;
        let collection_id = source
            .collection_id
            .ok_or(TransitionError::MissingCollection(source.id))?;
        let index = leaf_index_u32(source)?;

        let assembled = assemble_proofs(self.indexer, self.rpc, &[source.id]).await?;
        let proof = assembled
            .proofs
            .first()
            .map(|assembled| &assembled.proof)
            .ok_or_else(|| IndexerError::not_found("getAssetProof", source.id))?;

        let source_merkle_tree = proof.tree_id;
        let accounts = SplitAccounts {
            leaf_authority: LeafAuthorityAccounts::owner(request.owner),
            collection: CollectionAccounts::derive(&self.config.program_id, &collection_id),
            source_merkle_tree,
            destination_merkle_tree: self.config.destination_tree.unwrap_or(source_merkle_tree),
        };
        let data = SplitInstructionData {
            source_amount,
            asset_id: source.id.to_bytes(),
            root: proof.root,
            nonce: source.leaf_index,
            index,
            amounts: request.destination_amounts.clone(),
        };
        let instruction = create_split_instruction(
            &self.config.program_id,
            &accounts,
            &data,
            assembled.proof_accounts(),
        )?;

        info!(
            "Built split of {} ({}) into {:?} with {} proof nodes",
            source.id,
            source_amount,
            request.destination_amounts,
            assembled.total_len()
        );

        let mut instructions = compute_budget_instructions(self.config).to_vec();
        instructions.push(instruction);
        Ok(TransitionInstructions {
            instructions,
            destination_amounts: request.destination_amounts.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_split_amounts() {
        let policy = SplitPolicy::default();
        assert!(validate_split_amounts(125, &[124, 1], &policy).is_ok());
        assert!(validate_split_amounts(125, &[25, 50, 50], &policy).is_ok());

        let cases: [&[u64]; 5] = [&[125, 0], &[125], &[], &[100, 24], &[u64::MAX, 2]];
        for amounts in cases {
            assert!(
                matches!(
                    validate_split_amounts(125, amounts, &policy),
                    Err(TransitionError::InvalidSplitAmounts(_))
                ),
                "{:?}",
                amounts
            );
        }
    }

    #[test]
    fn test_split_policy_minimum() {
        let policy = SplitPolicy::new(100);
        assert!(validate_split_amounts(300, &[200, 100], &policy).is_ok());
        assert!(validate_split_amounts(125, &[100, 25], &policy).is_err());
        // A zero minimum still rejects empty leaves.
        assert!(validate_split_amounts(5, &[5, 0], &SplitPolicy::new(0)).is_err());
    }
}
