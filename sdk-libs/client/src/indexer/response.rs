//! Wire shapes of the DAS read API and their conversion into client types.

use serde::Deserialize;
use serde_json::Value;

use super::{
    base58::{
        decode_base58_hashes, decode_base58_or_default, decode_base58_to_fixed_array,
        decode_base58_to_pubkey,
    },
    error::IndexerError,
    options::GROUP_KEY_COLLECTION,
    types::{AssetDisplay, AssetPage, InclusionProof, LeafAsset},
};

pub const AMOUNT_ATTRIBUTE: &str = "Amount";
pub const TOKEN_NAME_ATTRIBUTE: &str = "Token name";

#[derive(Debug, Clone, Deserialize)]
pub struct RpcAsset {
    pub id: String,
    #[serde(default)]
    pub content: Option<RpcAssetContent>,
    #[serde(default)]
    pub compression: Option<RpcAssetCompression>,
    #[serde(default)]
    pub grouping: Vec<RpcAssetGrouping>,
    #[serde(default)]
    pub ownership: Option<RpcAssetOwnership>,
    #[serde(default)]
    pub burnt: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcAssetContent {
    #[serde(default)]
    pub metadata: Option<RpcAssetMetadata>,
    #[serde(default)]
    pub links: Option<RpcAssetLinks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcAssetMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Vec<RpcAssetAttribute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcAssetAttribute {
    #[serde(default)]
    pub trait_type: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcAssetLinks {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcAssetCompression {
    #[serde(default)]
    pub compressed: bool,
    #[serde(default)]
    pub data_hash: String,
    #[serde(default)]
    pub creator_hash: String,
    #[serde(default)]
    pub asset_hash: String,
    #[serde(default)]
    pub tree: String,
    #[serde(default)]
    pub leaf_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcAssetGrouping {
    pub group_key: String,
    #[serde(default)]
    pub group_value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcAssetOwnership {
    pub owner: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcAssetProof {
    pub root: String,
    pub proof: Vec<String>,
    pub node_index: u64,
    pub leaf: String,
    pub tree_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcAssetList {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default)]
    pub items: Vec<RpcAsset>,
    #[serde(default)]
    pub errors: Vec<Value>,
}

impl RpcAssetMetadata {
    fn attribute(&self, trait_type: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|attribute| attribute.trait_type.as_deref() == Some(trait_type))
            .and_then(|attribute| attribute.value.as_ref())
    }
}

fn attribute_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// `"1,000"` and `1000` both read as `"1000"`; a missing attribute reads as
/// `"0"`.
pub fn parse_amount_attribute(value: Option<&Value>) -> String {
    value
        .and_then(attribute_to_string)
        .map(|amount| amount.replace(',', "").trim().to_string())
        .filter(|amount| !amount.is_empty())
        .unwrap_or_else(|| "0".to_string())
}

impl TryFrom<RpcAsset> for LeafAsset {
    type Error = IndexerError;

    fn try_from(asset: RpcAsset) -> Result<Self, Self::Error> {
        let id = decode_base58_to_pubkey("id", &asset.id)?;
        let compression = asset.compression.unwrap_or_default();
        let metadata = asset
            .content
            .as_ref()
            .and_then(|content| content.metadata.clone())
            .unwrap_or_default();

        let collection_id = asset
            .grouping
            .iter()
            .find(|group| group.group_key == GROUP_KEY_COLLECTION)
            .and_then(|group| group.group_value.as_deref())
            .map(|value| decode_base58_to_pubkey("grouping.group_value", value))
            .transpose()?;

        let owner = match &asset.ownership {
            Some(ownership) => decode_base58_to_pubkey("ownership.owner", &ownership.owner)?,
            None => Default::default(),
        };
        let tree_id = if compression.tree.is_empty() {
            Default::default()
        } else {
            decode_base58_to_pubkey("compression.tree", &compression.tree)?
        };

        let display = AssetDisplay {
            name: metadata.name.clone(),
            token_name: metadata
                .attribute(TOKEN_NAME_ATTRIBUTE)
                .and_then(attribute_to_string),
            symbol: metadata.symbol.clone(),
            description: metadata.description.clone(),
            logo_uri: asset
                .content
                .as_ref()
                .and_then(|content| content.links.as_ref())
                .and_then(|links| links.image.clone()),
        };

        Ok(LeafAsset {
            id,
            owner,
            tree_id,
            leaf_index: compression.leaf_id,
            data_hash: decode_base58_or_default("compression.data_hash", &compression.data_hash)?,
            creator_hash: decode_base58_or_default(
                "compression.creator_hash",
                &compression.creator_hash,
            )?,
            leaf_hash: decode_base58_or_default("compression.asset_hash", &compression.asset_hash)?,
            compressed: compression.compressed,
            collection_id,
            amount: parse_amount_attribute(metadata.attribute(AMOUNT_ATTRIBUTE)),
            burnt: asset.burnt,
            display,
        })
    }
}

impl TryFrom<RpcAssetProof> for InclusionProof {
    type Error = IndexerError;

    fn try_from(proof: RpcAssetProof) -> Result<Self, Self::Error> {
        Ok(InclusionProof {
            root: decode_base58_to_fixed_array("root", &proof.root)?,
            leaf: decode_base58_to_fixed_array("leaf", &proof.leaf)?,
            proof_nodes: decode_base58_hashes("proof", &proof.proof)?,
            node_index: proof.node_index,
            tree_id: decode_base58_to_pubkey("tree_id", &proof.tree_id)?,
        })
    }
}

impl TryFrom<RpcAssetList> for AssetPage {
    type Error = IndexerError;

    fn try_from(list: RpcAssetList) -> Result<Self, Self::Error> {
        Ok(AssetPage {
            items: list
                .items
                .into_iter()
                .map(LeafAsset::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            total: list.total,
            limit: list.limit,
            page: list.page,
            before: list.before,
            after: list.after,
            cursor: list.cursor,
            errors: list.errors.iter().map(Value::to_string).collect(),
        })
    }
}
