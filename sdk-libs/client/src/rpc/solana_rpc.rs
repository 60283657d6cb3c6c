use std::fmt::{Debug, Formatter};

use async_trait::async_trait;
use solana_account::Account;
use solana_commitment_config::CommitmentConfig;
use solana_hash::Hash;
use solana_pubkey::Pubkey;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_signature::Signature;
use solana_transaction_status::TransactionStatus;
use tracing::debug;

use super::rpc_connection::RpcConnectionConfig;
use crate::rpc::{errors::RpcError, rpc_connection::Rpc};

/// `getMultipleAccounts` accepts at most this many keys per request.
pub const MAX_MULTIPLE_ACCOUNTS: usize = 100;

pub struct SolanaRpcConnection {
    pub client: RpcClient,
}

impl Debug for SolanaRpcConnection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolanaRpcConnection {{ client: {:?} }}",
            self.client.url()
        )
    }
}

#[async_trait]
impl Rpc for SolanaRpcConnection {
    fn new(config: RpcConnectionConfig) -> Self
    where
        Self: Sized,
    {
        let commitment_config = config
            .commitment_config
            .unwrap_or(CommitmentConfig::confirmed());
        let client = RpcClient::new_with_commitment(config.url, commitment_config);
        Self { client }
    }

    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        self.client
            .get_account_with_commitment(&address, self.client.commitment())
            .await
            .map(|response| response.value)
            .map_err(RpcError::from)
    }

    async fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<Account>>, RpcError> {
        let mut accounts = Vec::with_capacity(addresses.len());
        for chunk in addresses.chunks(MAX_MULTIPLE_ACCOUNTS) {
            debug!("getMultipleAccounts for {} keys", chunk.len());
            let response = self
                .client
                .get_multiple_accounts_with_commitment(chunk, self.client.commitment())
                .await?;
            accounts.extend(response.value);
        }
        Ok(accounts)
    }

    async fn get_latest_blockhash(&self) -> Result<(Hash, u64), RpcError> {
        self.client
            // Confirmed commitments land more reliably than finalized
            // https://www.helius.dev/blog/how-to-deal-with-blockhash-errors-on-solana#how-to-deal-with-blockhash-errors
            .get_latest_blockhash_with_commitment(CommitmentConfig::confirmed())
            .await
            .map_err(RpcError::from)
    }

    async fn get_block_height(&self) -> Result<u64, RpcError> {
        self.client
            .get_block_height_with_commitment(CommitmentConfig::confirmed())
            .await
            .map_err(RpcError::from)
    }

    async fn get_signature_statuses(
        &self,
        signatures: &[Signature],
    ) -> Result<Vec<Option<TransactionStatus>>, RpcError> {
        self.client
            .get_signature_statuses(signatures)
            .await
            .map(|response| response.value)
            .map_err(RpcError::from)
    }
}
