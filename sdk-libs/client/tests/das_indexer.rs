use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use solana_pubkey::Pubkey;
use tiny_spl_client::indexer::{
    AssetListOptions, AssetSortBy, DasIndexer, Indexer, IndexerError, JsonRpcRequest,
    JsonRpcResponse, JsonRpcTransport, SortDirection,
};

/// Records every request and answers with a canned response body.
#[derive(Debug)]
struct MockTransport {
    response: Value,
    requests: Mutex<Vec<JsonRpcRequest>>,
}

impl MockTransport {
    fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<JsonRpcRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl JsonRpcTransport for MockTransport {
    async fn send(&self, request: &JsonRpcRequest) -> Result<JsonRpcResponse, IndexerError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(serde_json::from_value(self.response.clone())?)
    }
}

fn indexer(response: Value) -> DasIndexer<MockTransport> {
    DasIndexer::with_transport(MockTransport::new(response), "test")
}

fn empty_page() -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": "test",
        "result": { "total": 0, "limit": 45, "page": 1, "items": [] }
    })
}

#[tokio::test]
async fn test_page_with_cursor_fails_without_request() {
    let indexer = indexer(empty_page());
    let owner = Pubkey::new_unique();

    let result = indexer
        .get_assets_by_owner(
            &owner,
            AssetListOptions::new()
                .with_page(1)
                .with_before("cursor".to_string()),
        )
        .await;
    assert!(matches!(result, Err(IndexerError::InvalidArgument(_))));

    let result = indexer
        .get_assets_by_group(
            "collection",
            &owner.to_string(),
            AssetListOptions::new()
                .with_page(2)
                .with_after("cursor".to_string()),
        )
        .await;
    assert!(matches!(result, Err(IndexerError::InvalidArgument(_))));

    assert!(indexer.transport().requests().is_empty());
}

#[tokio::test]
async fn test_get_assets_by_owner_request_shape() {
    let indexer = indexer(empty_page());
    let owner = Pubkey::new_unique();

    let page = indexer
        .get_assets_by_owner(
            &owner,
            AssetListOptions::new()
                .with_limit(45)
                .with_sort_by(AssetSortBy::Created, SortDirection::Asc),
        )
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.page, Some(1));

    let requests = indexer.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "getAssetsByOwner");
    assert_eq!(requests[0].id, "test");
    assert_eq!(
        requests[0].params,
        json!({
            "ownerAddress": owner.to_string(),
            "page": 1,
            "limit": 45,
            "sortBy": { "sortBy": "created", "sortDirection": "asc" }
        })
    );
}

#[tokio::test]
async fn test_cursor_pagination_omits_page() {
    let indexer = indexer(empty_page());
    indexer
        .get_assets_by_group(
            "collection",
            "group",
            AssetListOptions::new().with_after("abc".to_string()),
        )
        .await
        .unwrap();

    let requests = indexer.transport().requests();
    assert_eq!(
        requests[0].params,
        json!({ "groupKey": "collection", "groupValue": "group", "after": "abc" })
    );
}

#[tokio::test]
async fn test_missing_result_is_not_found() {
    let indexer = indexer(json!({ "jsonrpc": "2.0", "id": "test", "result": null }));
    let id = Pubkey::new_unique();

    let result = indexer.get_asset(&id).await;
    assert!(matches!(
        result,
        Err(IndexerError::NotFound { ref method, .. }) if method == "getAsset"
    ));
    let result = indexer.get_asset_proof(&id).await;
    assert!(matches!(result, Err(IndexerError::NotFound { .. })));
}

#[tokio::test]
async fn test_error_object_is_api_error() {
    let indexer = indexer(json!({
        "jsonrpc": "2.0",
        "id": "test",
        "error": { "code": -32000, "message": "Database Error: RecordNotFound" }
    }));

    let result = indexer.get_asset(&Pubkey::new_unique()).await;
    assert!(matches!(
        result,
        Err(IndexerError::ApiError { code: -32000, .. })
    ));
}

#[tokio::test]
async fn test_get_asset_proof() {
    let tree = Pubkey::new_unique();
    let node = |b: u8| bs58::encode([b; 32]).into_string();
    let indexer = indexer(json!({
        "jsonrpc": "2.0",
        "id": "test",
        "result": {
            "root": node(1),
            "proof": [node(2), node(3), node(4)],
            "node_index": 16389,
            "leaf": node(5),
            "tree_id": tree.to_string()
        }
    }));

    let proof = indexer.get_asset_proof(&Pubkey::new_unique()).await.unwrap();
    assert_eq!(proof.root, [1; 32]);
    assert_eq!(proof.proof_nodes, vec![[2; 32], [3; 32], [4; 32]]);
    assert_eq!(proof.node_index, 16389);
    assert_eq!(proof.tree_id, tree);
}
