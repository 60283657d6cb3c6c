#![allow(dead_code)]

use std::{
    collections::{HashMap, VecDeque},
    sync::{
        atomic::{AtomicU64, AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use borsh::BorshSerialize;
use solana_account::Account;
use solana_hash::Hash;
use solana_pubkey::Pubkey;
use solana_signature::Signature;
use solana_transaction_status::TransactionStatus;
use tiny_spl_client::{
    indexer::{
        AssetDisplay, AssetListOptions, AssetPage, InclusionProof, Indexer, IndexerError,
        LeafAsset,
    },
    rpc::{Rpc, RpcConnectionConfig, RpcError},
};
use tiny_spl_sdk::{
    address::find_tiny_spl_authority,
    constants::{PROGRAM_ID_ACCOUNT_COMPRESSION, PROGRAM_ID_TINY_SPL, TINY_SPL_AUTHORITY_DISCRIMINATOR},
    merkle_tree::{
        canopy_byte_len, merkle_tree_size, COMPRESSION_ACCOUNT_TYPE_CONCURRENT_MERKLE_TREE,
        CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1, HEADER_VERSION_V1,
    },
    state::TinySplAuthority,
};

pub const TREE_DEPTH: u32 = 14;
pub const TREE_BUFFER: u32 = 64;
pub const TREE_CANOPY: u32 = 10;

#[derive(Debug, Default)]
pub struct MockIndexer {
    pub assets: HashMap<Pubkey, LeafAsset>,
    pub proofs: HashMap<Pubkey, InclusionProof>,
    /// Page `n` of `getAssetsByOwner` returns `owner_pages[n - 1]`.
    pub owner_pages: Vec<Vec<LeafAsset>>,
    pub calls: AtomicUsize,
}

impl MockIndexer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Registers `asset` with a fresh proof of `TREE_DEPTH` nodes.
    pub fn add_asset(&mut self, asset: &LeafAsset) -> InclusionProof {
        let proof = proof_for(asset, TREE_DEPTH);
        self.assets.insert(asset.id, asset.clone());
        self.proofs.insert(asset.id, proof.clone());
        proof
    }
}

#[async_trait]
impl Indexer for MockIndexer {
    async fn get_asset(&self, id: &Pubkey) -> Result<LeafAsset, IndexerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.assets
            .get(id)
            .cloned()
            .ok_or_else(|| IndexerError::not_found("getAsset", id))
    }

    async fn get_asset_proof(&self, id: &Pubkey) -> Result<InclusionProof, IndexerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.proofs
            .get(id)
            .cloned()
            .ok_or_else(|| IndexerError::not_found("getAssetProof", id))
    }

    async fn get_assets_by_owner(
        &self,
        _owner: &Pubkey,
        options: AssetListOptions,
    ) -> Result<AssetPage, IndexerError> {
        options.validate()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        let page = options.page.unwrap_or(1);
        let items = self
            .owner_pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default();
        Ok(AssetPage {
            total: items.len() as u64,
            limit: options.limit.unwrap_or(1000),
            page: Some(page),
            items,
            ..Default::default()
        })
    }

    async fn get_assets_by_group(
        &self,
        _group_key: &str,
        group_value: &str,
        options: AssetListOptions,
    ) -> Result<AssetPage, IndexerError> {
        options.validate()?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        let items = self
            .assets
            .values()
            .filter(|asset| asset.collection_id.map(|c| c.to_string()).as_deref() == Some(group_value))
            .cloned()
            .collect();
        Ok(AssetPage {
            items,
            ..Default::default()
        })
    }
}

#[derive(Debug, Default)]
pub struct MockRpc {
    pub accounts: HashMap<Pubkey, Account>,
    pub fail_multiple_accounts: bool,
    pub block_height: AtomicU64,
    pub statuses: Mutex<VecDeque<Option<TransactionStatus>>>,
    pub calls: AtomicUsize,
    pub multiple_accounts_calls: AtomicUsize,
}

impl MockRpc {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn multiple_accounts_calls(&self) -> usize {
        self.multiple_accounts_calls.load(Ordering::SeqCst)
    }

    pub fn add_tree(&mut self, tree: Pubkey, canopy_depth: u32) {
        self.accounts
            .insert(tree, tree_account(TREE_DEPTH, TREE_BUFFER, canopy_depth));
    }

    /// Marks `collection` as a Tiny SPL token.
    pub fn add_collection(&mut self, collection: Pubkey, current_supply: u64) {
        let authority = find_tiny_spl_authority(&PROGRAM_ID_TINY_SPL, &collection).0;
        self.accounts
            .insert(authority, authority_account(current_supply));
    }

    pub fn push_status(&self, status: Option<TransactionStatus>) {
        self.statuses.lock().unwrap().push_back(status);
    }
}

#[async_trait]
impl Rpc for MockRpc {
    fn new(_config: RpcConnectionConfig) -> Self {
        Self::default()
    }

    async fn get_account(&self, address: Pubkey) -> Result<Option<Account>, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.accounts.get(&address).cloned())
    }

    async fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<Account>>, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.multiple_accounts_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_multiple_accounts {
            return Err(RpcError::CustomError("connection reset".to_string()));
        }
        Ok(addresses
            .iter()
            .map(|address| self.accounts.get(address).cloned())
            .collect())
    }

    async fn get_latest_blockhash(&self) -> Result<(Hash, u64), RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((Hash::new_from_array([9; 32]), 1_000))
    }

    async fn get_block_height(&self) -> Result<u64, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.block_height.load(Ordering::SeqCst))
    }

    async fn get_signature_statuses(
        &self,
        signatures: &[Signature],
    ) -> Result<Vec<Option<TransactionStatus>>, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let status = self.statuses.lock().unwrap().pop_front().flatten();
        Ok(signatures.iter().map(|_| status.clone()).collect())
    }
}

pub fn leaf(collection: Option<Pubkey>, tree: Pubkey, leaf_index: u64, amount: &str) -> LeafAsset {
    LeafAsset {
        id: Pubkey::new_unique(),
        owner: Pubkey::default(),
        tree_id: tree,
        leaf_index,
        data_hash: [1; 32],
        creator_hash: [2; 32],
        leaf_hash: [3; 32],
        compressed: true,
        collection_id: collection,
        amount: amount.to_string(),
        burnt: false,
        display: AssetDisplay {
            name: Some("TINY".to_string()),
            token_name: Some("Tiny Token".to_string()),
            symbol: Some("TINY".to_string()),
            description: None,
            logo_uri: None,
        },
    }
}

pub fn proof_for(asset: &LeafAsset, depth: u32) -> InclusionProof {
    InclusionProof {
        root: [7; 32],
        leaf: asset.leaf_hash,
        proof_nodes: (0..depth).map(|_| Pubkey::new_unique().to_bytes()).collect(),
        node_index: (1u64 << depth) + asset.leaf_index,
        tree_id: asset.tree_id,
    }
}

pub fn tree_account(max_depth: u32, max_buffer_size: u32, canopy_depth: u32) -> Account {
    let mut data = vec![
        COMPRESSION_ACCOUNT_TYPE_CONCURRENT_MERKLE_TREE,
        HEADER_VERSION_V1,
    ];
    data.extend(max_buffer_size.to_le_bytes());
    data.extend(max_depth.to_le_bytes());
    data.extend(Pubkey::new_unique().to_bytes());
    data.extend(1u64.to_le_bytes());
    data.resize(CONCURRENT_MERKLE_TREE_HEADER_SIZE_V1, 0);
    data.resize(
        data.len()
            + merkle_tree_size(max_depth as usize, max_buffer_size as usize).unwrap()
            + canopy_byte_len(canopy_depth),
        0,
    );
    Account {
        lamports: 1,
        data,
        owner: PROGRAM_ID_ACCOUNT_COMPRESSION,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn authority_account(current_supply: u64) -> Account {
    let mut data = TINY_SPL_AUTHORITY_DISCRIMINATOR.to_vec();
    data.extend(
        TinySplAuthority {
            is_verified_tiny_spl_mint: true,
            current_supply,
            mint_authority: None,
        }
        .try_to_vec()
        .unwrap(),
    );
    Account {
        lamports: 1,
        data,
        owner: PROGRAM_ID_TINY_SPL,
        executable: false,
        rent_epoch: 0,
    }
}
