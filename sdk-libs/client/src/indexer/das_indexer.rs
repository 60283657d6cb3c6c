use std::fmt::Debug;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use solana_pubkey::Pubkey;
use tracing::{debug, error};

use super::{
    config::IndexerConfig,
    error::IndexerError,
    options::AssetListOptions,
    response::{RpcAsset, RpcAssetList, RpcAssetProof},
    transport::{HttpTransport, JsonRpcRequest, JsonRpcTransport},
    types::{AssetPage, InclusionProof, LeafAsset},
    Indexer,
};

/// Metaplex DAS read API client. Holds no state besides its transport and
/// the JSON-RPC request id.
pub struct DasIndexer<T: JsonRpcTransport = HttpTransport> {
    transport: T,
    request_id: String,
}

impl DasIndexer<HttpTransport> {
    pub fn new(config: IndexerConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self::with_transport(transport, config.request_id)
    }
}

impl<T: JsonRpcTransport> DasIndexer<T> {
    pub fn with_transport(transport: T, request_id: impl Into<String>) -> Self {
        Self {
            transport,
            request_id: request_id.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        subject: &str,
        params: Value,
    ) -> Result<R, IndexerError> {
        let request = JsonRpcRequest::new(self.request_id.clone(), method, params);
        debug!("{} request for {}", method, subject);
        let response = self.transport.send(&request).await?;

        if let Some(err) = response.error {
            error!("{} failed for {}: {}", method, subject, err.message);
            return Err(IndexerError::ApiError {
                code: err.code,
                message: err.message,
            });
        }
        match response.result {
            None | Some(Value::Null) => Err(IndexerError::not_found(method, subject)),
            Some(result) => Ok(serde_json::from_value(result)?),
        }
    }

    fn list_params(
        mut params: Map<String, Value>,
        options: &AssetListOptions,
    ) -> Result<Value, IndexerError> {
        options.validate()?;
        if let Some(page) = options.effective_page() {
            params.insert("page".to_string(), json!(page));
        }
        if let Some(limit) = options.limit {
            params.insert("limit".to_string(), json!(limit));
        }
        if let Some(before) = &options.before {
            params.insert("before".to_string(), json!(before));
        }
        if let Some(after) = &options.after {
            params.insert("after".to_string(), json!(after));
        }
        if let Some(sort_by) = &options.sort_by {
            params.insert("sortBy".to_string(), serde_json::to_value(sort_by)?);
        }
        Ok(Value::Object(params))
    }
}

impl<T: JsonRpcTransport> Debug for DasIndexer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DasIndexer")
            .field("transport", &self.transport)
            .field("request_id", &self.request_id)
            .finish()
    }
}

#[async_trait]
impl<T: JsonRpcTransport> Indexer for DasIndexer<T> {
    async fn get_asset(&self, id: &Pubkey) -> Result<LeafAsset, IndexerError> {
        let id = id.to_string();
        let asset: RpcAsset = self.call("getAsset", &id, json!({ "id": id })).await?;
        LeafAsset::try_from(asset)
    }

    async fn get_asset_proof(&self, id: &Pubkey) -> Result<InclusionProof, IndexerError> {
        let id = id.to_string();
        let proof: RpcAssetProof = self
            .call("getAssetProof", &id, json!({ "id": id }))
            .await?;
        InclusionProof::try_from(proof)
    }

    async fn get_assets_by_owner(
        &self,
        owner: &Pubkey,
        options: AssetListOptions,
    ) -> Result<AssetPage, IndexerError> {
        let owner = owner.to_string();
        let mut params = Map::new();
        params.insert("ownerAddress".to_string(), json!(owner));
        let params = Self::list_params(params, &options)?;
        let list: RpcAssetList = self.call("getAssetsByOwner", &owner, params).await?;
        AssetPage::try_from(list)
    }

    async fn get_assets_by_group(
        &self,
        group_key: &str,
        group_value: &str,
        options: AssetListOptions,
    ) -> Result<AssetPage, IndexerError> {
        let mut params = Map::new();
        params.insert("groupKey".to_string(), json!(group_key));
        params.insert("groupValue".to_string(), json!(group_value));
        let params = Self::list_params(params, &options)?;
        let list: RpcAssetList = self
            .call("getAssetsByGroup", group_value, params)
            .await?;
        AssetPage::try_from(list)
    }
}
