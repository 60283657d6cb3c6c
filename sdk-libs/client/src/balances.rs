//! Classifies raw assets into Tiny SPL balances, one row per collection.
//!
//! A collection is a Tiny SPL token iff its authority PDA exists on chain.
//! All authority accounts are checked with a single batched request and the
//! whole classification fails if that request fails. A leaf whose amount
//! does not parse is skipped, as is a collection left with no members.

use std::{cmp::Ordering, collections::HashMap};

use num_bigint::BigUint;
use num_traits::Zero;
use solana_pubkey::Pubkey;
use tiny_spl_sdk::{address::find_tiny_spl_authority, state::TinySplAuthority};
use tracing::{debug, warn};

use crate::{
    error::TransitionError,
    indexer::{Indexer, LeafAsset},
    rpc::Rpc,
};

/// Page size the balance view uses when walking an owner's assets.
pub const DEFAULT_PAGE_SIZE: u64 = 45;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRow {
    pub collection_id: Pubkey,
    pub display_name: String,
    pub symbol: String,
    pub logo_uri: Option<String>,
    pub description: Option<String>,
    /// Exact decimal sum of the member amounts.
    pub total_amount: String,
    /// Supply tracked by the collection's authority account, when decodable.
    pub current_supply: Option<u64>,
    /// Sorted by descending amount.
    pub members: Vec<LeafAsset>,
}

pub fn parse_amount(asset: &LeafAsset) -> Result<BigUint, TransitionError> {
    asset
        .amount
        .parse::<BigUint>()
        .map_err(|_| TransitionError::InvalidAmount {
            asset: asset.id,
            value: asset.amount.clone(),
        })
}

/// Drops burnt assets and assets of foreign collections, then groups the rest
/// by collection.
pub async fn classify_assets<R: Rpc>(
    rpc: &R,
    program_id: &Pubkey,
    assets: Vec<LeafAsset>,
) -> Result<Vec<CollectionRow>, TransitionError> {
    let mut collections: Vec<Pubkey> = Vec::new();
    let mut grouped: HashMap<Pubkey, Vec<LeafAsset>> = HashMap::new();
    for asset in assets.into_iter().filter(|asset| !asset.burnt) {
        let Some(collection_id) = asset.collection_id else {
            continue;
        };
        grouped
            .entry(collection_id)
            .or_insert_with(|| {
                collections.push(collection_id);
                Vec::new()
            })
            .push(asset);
    }
    if collections.is_empty() {
        return Ok(Vec::new());
    }

    let authorities: Vec<Pubkey> = collections
        .iter()
        .map(|collection| find_tiny_spl_authority(program_id, collection).0)
        .collect();
    let accounts = rpc.get_multiple_accounts(&authorities).await?;
    if accounts.len() != authorities.len() {
        return Err(TransitionError::Rpc(crate::rpc::RpcError::CustomError(
            format!(
                "requested {} authority accounts, received {}",
                authorities.len(),
                accounts.len()
            ),
        )));
    }

    let mut rows = Vec::new();
    for (collection_id, account) in collections.into_iter().zip(accounts) {
        let Some(account) = account else {
            debug!("Collection {} is not a Tiny SPL token", collection_id);
            continue;
        };
        let current_supply = match TinySplAuthority::deserialize_account(&account.data) {
            Ok(authority) => Some(authority.current_supply),
            Err(e) => {
                warn!(
                    "Failed to decode authority of collection {}: {}",
                    collection_id, e
                );
                None
            }
        };
        let members = grouped.remove(&collection_id).unwrap_or_default();
        rows.extend(build_row(collection_id, current_supply, members));
    }

    rows.sort_by(|a, b| compare_totals(b, a).then(a.collection_id.cmp(&b.collection_id)));
    Ok(rows)
}

fn compare_totals(a: &CollectionRow, b: &CollectionRow) -> Ordering {
    // Totals are canonical decimal strings: a longer string is a larger number.
    a.total_amount
        .len()
        .cmp(&b.total_amount.len())
        .then_with(|| a.total_amount.cmp(&b.total_amount))
}

fn build_row(
    collection_id: Pubkey,
    current_supply: Option<u64>,
    members: Vec<LeafAsset>,
) -> Option<CollectionRow> {
    let mut amounts = members
        .into_iter()
        .filter_map(|asset| match parse_amount(&asset) {
            Ok(amount) => Some((amount, asset)),
            Err(e) => {
                warn!("Skipping asset {}: {}", asset.id, e);
                None
            }
        })
        .collect::<Vec<_>>();
    let display = amounts.first()?.1.display.clone();
    amounts.sort_by(|(a, _), (b, _)| b.cmp(a));

    let total = amounts
        .iter()
        .fold(BigUint::zero(), |total, (amount, _)| total + amount);

    Some(CollectionRow {
        collection_id,
        display_name: display
            .token_name
            .or(display.name)
            .unwrap_or_else(|| collection_id.to_string()),
        symbol: display.symbol.unwrap_or_default(),
        logo_uri: display.logo_uri,
        description: display.description,
        total_amount: total.to_string(),
        current_supply,
        members: amounts.into_iter().map(|(_, asset)| asset).collect(),
    })
}

/// Fetches every asset of `owner` and classifies them.
pub async fn fetch_collection_rows<I: Indexer + ?Sized, R: Rpc>(
    indexer: &I,
    rpc: &R,
    program_id: &Pubkey,
    owner: &Pubkey,
    page_size: u64,
) -> Result<Vec<CollectionRow>, TransitionError> {
    let assets = indexer.fetch_all_assets_by_owner(owner, page_size).await?;
    debug!("Classifying {} assets of {}", assets.len(), owner);
    classify_assets(rpc, program_id, assets).await
}
