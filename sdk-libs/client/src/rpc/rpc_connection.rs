use std::fmt::Debug;

use async_trait::async_trait;
use solana_account::Account;
use solana_commitment_config::CommitmentConfig;
use solana_hash::Hash;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction_status::TransactionStatus;

use crate::rpc::errors::RpcError;

#[derive(Debug, Clone)]
pub struct RpcConnectionConfig {
    pub url: String,
    pub commitment_config: Option<CommitmentConfig>,
}

/// Read side of a Solana RPC node. Nothing here signs or submits.
#[async_trait]
pub trait Rpc: Send + Sync + Debug + 'static {
    fn new(config: RpcConnectionConfig) -> Self
    where
        Self: Sized;

    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError>;

    /// Results are index aligned with `addresses`.
    async fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<Account>>, RpcError>;

    /// Latest blockhash and the last block height at which it is valid.
    async fn get_latest_blockhash(&self) -> Result<(Hash, u64), RpcError>;

    async fn get_block_height(&self) -> Result<u64, RpcError>;

    async fn get_signature_statuses(
        &self,
        signatures: &[Signature],
    ) -> Result<Vec<Option<TransactionStatus>>, RpcError>;
}
