pub mod das_indexer;

mod base58;
mod config;
mod error;
mod indexer_trait;
pub mod response;
pub mod transport;
mod types;

pub use base58::{
    decode_base58_or_default, decode_base58_to_fixed_array, decode_base58_to_pubkey,
    Base58Conversions,
};
pub use config::{IndexerConfig, DEFAULT_REQUEST_ID};
pub use das_indexer::DasIndexer;
pub use error::IndexerError;
pub use indexer_trait::Indexer;
pub use transport::{HttpTransport, JsonRpcRequest, JsonRpcResponse, JsonRpcTransport};
pub use types::{AssetDisplay, AssetPage, Hash, InclusionProof, LeafAsset};
mod options;
pub use options::*;
