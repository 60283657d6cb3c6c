#![allow(clippy::result_large_err)]

pub mod errors;
pub mod merkle_tree;
mod rpc_connection;
pub mod solana_rpc;

pub use errors::RpcError;
pub use merkle_tree::MerkleTreeExt;
pub use rpc_connection::{Rpc, RpcConnectionConfig};
pub use solana_rpc::SolanaRpcConnection;
