use solana_pubkey::Pubkey;

pub type Hash = [u8; 32];

/// Display fields read from the asset's off-chain metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetDisplay {
    pub name: Option<String>,
    /// `"Token name"` attribute, the human readable token name.
    pub token_name: Option<String>,
    pub symbol: Option<String>,
    pub description: Option<String>,
    pub logo_uri: Option<String>,
}

/// One compressed leaf as reported by the read API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafAsset {
    pub id: Pubkey,
    pub owner: Pubkey,
    pub tree_id: Pubkey,
    pub leaf_index: u64,
    pub data_hash: Hash,
    pub creator_hash: Hash,
    pub leaf_hash: Hash,
    pub compressed: bool,
    pub collection_id: Option<Pubkey>,
    /// Decimal string without thousands separators.
    pub amount: String,
    pub burnt: bool,
    pub display: AssetDisplay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionProof {
    pub root: Hash,
    pub leaf: Hash,
    /// Sibling hashes ordered from the leaf up to the root.
    pub proof_nodes: Vec<Hash>,
    pub node_index: u64,
    pub tree_id: Pubkey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetPage {
    pub items: Vec<LeafAsset>,
    pub total: u64,
    pub limit: u64,
    pub page: Option<u64>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub cursor: Option<String>,
    /// Per item errors reported next to the page.
    pub errors: Vec<String>,
}
