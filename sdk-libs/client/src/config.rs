use solana_pubkey::Pubkey;
use tiny_spl_sdk::constants::{
    DEFAULT_COMPUTE_UNIT_LIMIT, DEFAULT_COMPUTE_UNIT_PRICE_MICRO_LAMPORTS, PROGRAM_ID_TINY_SPL,
};

/// Lower bound on every destination amount of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPolicy {
    pub min_destination_amount: u64,
}

impl SplitPolicy {
    pub fn new(min_destination_amount: u64) -> Self {
        Self {
            min_destination_amount,
        }
    }
}

impl Default for SplitPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TinySplConfig {
    pub program_id: Pubkey,
    pub compute_unit_price_micro_lamports: u64,
    pub compute_unit_limit: u32,
    /// Tree receiving the leaves minted by a split. Defaults to the source
    /// leaf's tree.
    pub destination_tree: Option<Pubkey>,
    pub lookup_table: Option<Pubkey>,
    pub split_policy: SplitPolicy,
}

impl Default for TinySplConfig {
    fn default() -> Self {
        Self {
            program_id: PROGRAM_ID_TINY_SPL,
            compute_unit_price_micro_lamports: DEFAULT_COMPUTE_UNIT_PRICE_MICRO_LAMPORTS,
            compute_unit_limit: DEFAULT_COMPUTE_UNIT_LIMIT,
            destination_tree: None,
            lookup_table: None,
            split_policy: SplitPolicy::default(),
        }
    }
}
