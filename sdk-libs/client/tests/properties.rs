mod common;

use common::leaf;
use proptest::prelude::*;
use solana_pubkey::Pubkey;
use tiny_spl_client::{
    config::SplitPolicy,
    indexer::Hash,
    proof::{proof_path_end_indexes, trim_proof},
    transition::{validate_combine_sources, validate_split_amounts},
    TransitionError,
};

proptest! {
    #[test]
    fn split_amounts_sum_to_source(amounts in prop::collection::vec(1u64..1_000_000_000, 2..16)) {
        let source: u64 = amounts.iter().sum();
        prop_assert!(validate_split_amounts(source, &amounts, &SplitPolicy::default()).is_ok());
        prop_assert!(matches!(
            validate_split_amounts(source + 1, &amounts, &SplitPolicy::default()),
            Err(TransitionError::InvalidSplitAmounts(_))
        ));
    }

    #[test]
    fn split_with_zero_destination_fails(
        mut amounts in prop::collection::vec(1u64..1_000_000, 1..16),
        position in any::<prop::sample::Index>(),
    ) {
        let index = position.index(amounts.len() + 1);
        amounts.insert(index, 0);
        let source: u64 = amounts.iter().sum();
        prop_assert!(matches!(
            validate_split_amounts(source, &amounts, &SplitPolicy::default()),
            Err(TransitionError::InvalidSplitAmounts(_))
        ));
    }

    #[test]
    fn combine_total_is_order_independent(
        amounts in prop::collection::vec(0u64..1_000_000_000_000, 2..12)
            .prop_shuffle()
            .prop_flat_map(|amounts| (Just(amounts.clone()), Just(amounts).prop_shuffle())),
    ) {
        let collection = Pubkey::new_unique();
        let tree = Pubkey::new_unique();
        let to_sources = |amounts: &[u64]| -> Vec<_> {
            amounts
                .iter()
                .enumerate()
                .map(|(i, amount)| leaf(Some(collection), tree, i as u64, &amount.to_string()))
                .collect()
        };
        let (original, shuffled) = amounts;
        let expected: u64 = original.iter().sum();

        let summary = validate_combine_sources(&to_sources(&original)).unwrap();
        prop_assert_eq!(summary.total, expected);
        prop_assert_eq!(summary.amounts, original);
        prop_assert_eq!(validate_combine_sources(&to_sources(&shuffled)).unwrap().total, expected);
    }

    #[test]
    fn trimmed_length(proof_len in 0usize..32, canopy_depth in 0u32..40) {
        let nodes: Vec<Hash> = (0..proof_len).map(|i| [i as u8; 32]).collect();
        let trimmed = trim_proof(&nodes, canopy_depth);
        prop_assert_eq!(trimmed.len(), proof_len.saturating_sub(canopy_depth as usize));
        prop_assert_eq!(trimmed, &nodes[..trimmed.len()]);
    }

    #[test]
    fn proof_segment_end_indexes(
        segments in prop::collection::vec((1usize..31, 0u32..30), 1..10),
    ) {
        // Canopy shallower than the proof, so every segment keeps a node.
        let lengths: Vec<usize> = segments
            .iter()
            .map(|(len, canopy)| {
                let nodes = vec![[0u8; 32]; *len];
                trim_proof(&nodes, (*canopy).min(*len as u32 - 1)).len()
            })
            .collect();
        let ends = proof_path_end_indexes(lengths.iter().copied());

        prop_assert_eq!(ends.len(), lengths.len());
        prop_assert!(ends.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(*ends.last().unwrap() as usize, lengths.iter().sum::<usize>());
    }
}
