//! Read-only view of an spl-account-compression concurrent merkle tree
//! account: header fields and the depth of the canopy stored after the tree.

use borsh::BorshDeserialize;
use solana_pubkey::Pubkey;

use crate::error::TinySplSdkError;

pub const COMPRESSION_ACCOUNT_TYPE_CONCURRENT_MERKLE_TREE: u8 = 1;
pub const HEADER_VERSION_V1: u8 = 0;
/// account type (1) + header version (1) + V1 header body (54).
pub const CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1: usize = 56;
/// Largest tree spl-account-compression can initialize.
pub const MAX_TREE_DEPTH: u32 = 30;
pub const MAX_TREE_BUFFER_SIZE: u32 = 2048;

const NODE_SIZE: usize = 32;

#[derive(Debug, BorshDeserialize)]
struct ConcurrentMerkleTreeHeaderV1 {
    account_type: u8,
    version: u8,
    max_buffer_size: u32,
    max_depth: u32,
    authority: [u8; 32],
    creation_slot: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeAccountInfo {
    pub max_depth: u32,
    pub max_buffer_size: u32,
    pub authority: Pubkey,
    pub creation_slot: u64,
    /// Number of upper proof levels cached on chain.
    pub canopy_depth: u32,
}

impl TreeAccountInfo {
    pub fn from_account_data(data: &[u8]) -> Result<Self, TinySplSdkError> {
        if data.len() < CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1 {
            return Err(TinySplSdkError::InvalidAccountData {
                expected: CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1,
                actual: data.len(),
            });
        }
        let header = ConcurrentMerkleTreeHeaderV1::deserialize(&mut &data[..])?;
        if header.account_type != COMPRESSION_ACCOUNT_TYPE_CONCURRENT_MERKLE_TREE
            || header.version != HEADER_VERSION_V1
        {
            return Err(TinySplSdkError::UnsupportedTreeHeader {
                account_type: header.account_type,
                version: header.version,
            });
        }

        if header.max_depth == 0
            || header.max_depth > MAX_TREE_DEPTH
            || header.max_buffer_size == 0
            || header.max_buffer_size > MAX_TREE_BUFFER_SIZE
        {
            return Err(TinySplSdkError::InvalidTreeDimensions {
                max_depth: header.max_depth,
                max_buffer_size: header.max_buffer_size,
            });
        }

        let tree_end =
            merkle_tree_size(header.max_depth as usize, header.max_buffer_size as usize)
                .and_then(|size| size.checked_add(CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1))
                .ok_or(TinySplSdkError::InvalidTreeDimensions {
                    max_depth: header.max_depth,
                    max_buffer_size: header.max_buffer_size,
                })?;
        if data.len() < tree_end {
            return Err(TinySplSdkError::InvalidAccountData {
                expected: tree_end,
                actual: data.len(),
            });
        }

        Ok(Self {
            max_depth: header.max_depth,
            max_buffer_size: header.max_buffer_size,
            authority: Pubkey::new_from_array(header.authority),
            creation_slot: header.creation_slot,
            canopy_depth: canopy_depth(data.len() - tree_end)?,
        })
    }
}

/// Size of `ConcurrentMerkleTree<max_depth, max_buffer_size>`: three u64
/// counters, the changelog buffer and the rightmost proof. A changelog entry
/// and the rightmost path both hold `max_depth + 1` nodes plus an index and
/// padding. `None` on overflow.
pub fn merkle_tree_size(max_depth: usize, max_buffer_size: usize) -> Option<usize> {
    let path_size = max_depth
        .checked_add(1)?
        .checked_mul(NODE_SIZE)?
        .checked_add(4 + 4)?;
    max_buffer_size
        .checked_add(1)?
        .checked_mul(path_size)?
        .checked_add(3 * 8)
}

/// A canopy of depth `d` stores `2^(d+1) - 2` nodes.
pub fn canopy_depth(canopy_byte_len: usize) -> Result<u32, TinySplSdkError> {
    if canopy_byte_len % NODE_SIZE != 0 {
        return Err(TinySplSdkError::InvalidCanopy {
            byte_len: canopy_byte_len,
        });
    }
    let nodes = canopy_byte_len / NODE_SIZE + 2;
    if !nodes.is_power_of_two() {
        return Err(TinySplSdkError::InvalidCanopy {
            byte_len: canopy_byte_len,
        });
    }
    Ok(nodes.trailing_zeros() - 1)
}

pub fn canopy_byte_len(canopy_depth: u32) -> usize {
    ((1usize << (canopy_depth + 1)) - 2) * NODE_SIZE
}
