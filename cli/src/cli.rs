use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use tiny_spl_client::{
    balances::DEFAULT_PAGE_SIZE,
    config::{SplitPolicy, TinySplConfig},
    confirmation::ConfirmConfig,
    indexer::IndexerConfig,
    rpc::RpcConnectionConfig,
};
use tiny_spl_sdk::constants::{
    DEFAULT_COMPUTE_UNIT_LIMIT, DEFAULT_COMPUTE_UNIT_PRICE_MICRO_LAMPORTS, PROGRAM_ID_TINY_SPL,
};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Also write logs to hourly rotated files in this directory.
    #[arg(long, env = "TINY_SPL_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[allow(clippy::large_enum_variant)]
#[derive(Subcommand)]
pub enum Commands {
    /// List Tiny SPL balances of an owner, one row per collection.
    Balances(BalancesArgs),
    /// Print the header and canopy depth of a merkle tree account.
    TreeInfo(TreeInfoArgs),
    /// Build an unsigned transaction splitting one leaf.
    Split(SplitArgs),
    /// Build an unsigned transaction combining several leaves.
    Combine(CombineArgs),
    /// Poll a submitted transaction until it lands, fails or expires.
    Confirm(ConfirmArgs),
}

#[derive(Args, Clone, Debug)]
pub struct RpcArgs {
    #[arg(long, env = "TINY_SPL_RPC_URL", default_value = "https://api.devnet.solana.com")]
    pub rpc_url: String,
}

impl RpcArgs {
    pub fn rpc_config(&self) -> RpcConnectionConfig {
        RpcConnectionConfig {
            url: self.rpc_url.clone(),
            commitment_config: None,
        }
    }
}

#[derive(Args, Clone, Debug)]
pub struct IndexerArgs {
    /// DAS read API endpoint. Defaults to the RPC url.
    #[arg(long, env = "TINY_SPL_INDEXER_URL")]
    pub indexer_url: Option<String>,

    #[arg(long, env = "TINY_SPL_INDEXER_API_KEY")]
    pub indexer_api_key: Option<String>,
}

impl IndexerArgs {
    pub fn indexer_config(&self, rpc: &RpcArgs) -> IndexerConfig {
        let url = self
            .indexer_url
            .clone()
            .unwrap_or_else(|| rpc.rpc_url.clone());
        IndexerConfig::new(url).with_api_key(self.indexer_api_key.clone())
    }
}

#[derive(Args, Clone, Debug)]
pub struct ProgramArgs {
    #[arg(long, env = "TINY_SPL_PROGRAM_ID", default_value_t = PROGRAM_ID_TINY_SPL)]
    pub program_id: Pubkey,

    /// Tree receiving split leaves instead of the source tree.
    #[arg(long, env = "TINY_SPL_DESTINATION_TREE")]
    pub destination_tree: Option<Pubkey>,

    #[arg(long, env = "TINY_SPL_LOOKUP_TABLE")]
    pub lookup_table: Option<Pubkey>,

    #[arg(long, env = "TINY_SPL_MIN_SPLIT_AMOUNT", default_value = "1")]
    pub min_split_amount: u64,

    #[arg(long, env = "TINY_SPL_CU_PRICE", default_value_t = DEFAULT_COMPUTE_UNIT_PRICE_MICRO_LAMPORTS)]
    pub cu_price: u64,

    #[arg(long, env = "TINY_SPL_CU_LIMIT", default_value_t = DEFAULT_COMPUTE_UNIT_LIMIT)]
    pub cu_limit: u32,
}

impl ProgramArgs {
    pub fn tiny_spl_config(&self) -> TinySplConfig {
        TinySplConfig {
            program_id: self.program_id,
            compute_unit_price_micro_lamports: self.cu_price,
            compute_unit_limit: self.cu_limit,
            destination_tree: self.destination_tree,
            lookup_table: self.lookup_table,
            split_policy: SplitPolicy::new(self.min_split_amount),
        }
    }
}

#[derive(Parser, Clone, Debug)]
pub struct BalancesArgs {
    #[arg(long)]
    pub owner: Pubkey,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u64,

    #[arg(long, env = "TINY_SPL_PROGRAM_ID", default_value_t = PROGRAM_ID_TINY_SPL)]
    pub program_id: Pubkey,

    #[command(flatten)]
    pub rpc: RpcArgs,

    #[command(flatten)]
    pub indexer: IndexerArgs,
}

#[derive(Parser, Clone, Debug)]
pub struct TreeInfoArgs {
    #[arg(long)]
    pub tree: Pubkey,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

#[derive(Parser, Clone, Debug)]
pub struct SplitArgs {
    /// Signer and fee payer; owner of the source and new leaves.
    #[arg(long)]
    pub owner: Pubkey,

    #[arg(long)]
    pub asset: Pubkey,

    #[arg(long, value_delimiter = ',', required = true)]
    pub amounts: Vec<u64>,

    #[command(flatten)]
    pub program: ProgramArgs,

    #[command(flatten)]
    pub rpc: RpcArgs,

    #[command(flatten)]
    pub indexer: IndexerArgs,
}

#[derive(Parser, Clone, Debug)]
pub struct CombineArgs {
    #[arg(long)]
    pub owner: Pubkey,

    #[arg(long, value_delimiter = ',', required = true)]
    pub assets: Vec<Pubkey>,

    #[command(flatten)]
    pub program: ProgramArgs,

    #[command(flatten)]
    pub rpc: RpcArgs,

    #[command(flatten)]
    pub indexer: IndexerArgs,
}

#[derive(Parser, Clone, Debug)]
pub struct ConfirmArgs {
    #[arg(long)]
    pub signature: Signature,

    #[arg(long)]
    pub last_valid_block_height: u64,

    #[arg(long, default_value = "90")]
    pub timeout_secs: u64,

    #[arg(long, default_value = "2000")]
    pub poll_interval_ms: u64,

    #[command(flatten)]
    pub rpc: RpcArgs,
}

impl ConfirmArgs {
    pub fn confirm_config(&self) -> ConfirmConfig {
        ConfirmConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            ..Default::default()
        }
    }
}
