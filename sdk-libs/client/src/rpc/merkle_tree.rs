use async_trait::async_trait;
use solana_pubkey::Pubkey;
use tiny_spl_sdk::{
    constants::PROGRAM_ID_ACCOUNT_COMPRESSION, merkle_tree::TreeAccountInfo, TinySplSdkError,
};

use super::{Rpc, RpcError};

/// Extension to the RPC connection which reads spl-account-compression tree
/// accounts.
#[async_trait]
pub trait MerkleTreeExt: Rpc {
    async fn get_tree_account_info(&self, merkle_tree: Pubkey) -> Result<TreeAccountInfo, RpcError> {
        let account = self
            .get_account(merkle_tree)
            .await?
            .ok_or(RpcError::AccountNotFound(merkle_tree))?;
        if account.owner != PROGRAM_ID_ACCOUNT_COMPRESSION {
            return Err(TinySplSdkError::InvalidAccountOwner {
                expected: PROGRAM_ID_ACCOUNT_COMPRESSION,
                found: account.owner,
            }
            .into());
        }
        Ok(TreeAccountInfo::from_account_data(&account.data)?)
    }

    async fn get_canopy_depth(&self, merkle_tree: Pubkey) -> Result<u32, RpcError> {
        Ok(self.get_tree_account_info(merkle_tree).await?.canopy_depth)
    }
}

impl<T: Rpc> MerkleTreeExt for T {}
