use async_trait::async_trait;
use solana_pubkey::Pubkey;
use tracing::debug;

use super::{
    error::IndexerError,
    options::AssetListOptions,
    types::{AssetPage, InclusionProof, LeafAsset},
};

#[async_trait]
pub trait Indexer: Send + Sync {
    /// Fails with [`IndexerError::NotFound`] when the service has no such asset.
    async fn get_asset(&self, id: &Pubkey) -> Result<LeafAsset, IndexerError>;

    async fn get_asset_proof(&self, id: &Pubkey) -> Result<InclusionProof, IndexerError>;

    async fn get_assets_by_owner(
        &self,
        owner: &Pubkey,
        options: AssetListOptions,
    ) -> Result<AssetPage, IndexerError>;

    async fn get_assets_by_group(
        &self,
        group_key: &str,
        group_value: &str,
        options: AssetListOptions,
    ) -> Result<AssetPage, IndexerError>;

    /// Walks pages `1, 2, ...` until the service returns an empty page.
    async fn fetch_all_assets_by_owner(
        &self,
        owner: &Pubkey,
        page_size: u64,
    ) -> Result<Vec<LeafAsset>, IndexerError> {
        if page_size == 0 {
            return Err(IndexerError::InvalidArgument(
                "page size must be positive".to_string(),
            ));
        }
        let mut assets = Vec::new();
        let mut page = 1;
        loop {
            let options = AssetListOptions::new()
                .with_page(page)
                .with_limit(page_size);
            let result = self.get_assets_by_owner(owner, options).await?;
            debug!(
                "Fetched page {} of assets for {}: {} items",
                page,
                owner,
                result.items.len()
            );
            if result.items.is_empty() {
                return Ok(assets);
            }
            assets.extend(result.items);
            page += 1;
        }
    }
}
