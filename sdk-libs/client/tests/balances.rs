mod common;

use common::*;
use solana_pubkey::Pubkey;
use tiny_spl_client::{
    balances::{classify_assets, fetch_collection_rows},
    TransitionError,
};
use tiny_spl_sdk::constants::PROGRAM_ID_TINY_SPL;

#[tokio::test]
async fn test_classify_assets() {
    let tree = Pubkey::new_unique();
    let small = Pubkey::new_unique();
    let large = Pubkey::new_unique();
    let foreign = Pubkey::new_unique();

    let mut burnt = leaf(Some(large), tree, 0, "1000000");
    burnt.burnt = true;
    let assets = vec![
        leaf(Some(small), tree, 1, "10"),
        leaf(Some(large), tree, 2, "100"),
        leaf(Some(foreign), tree, 3, "99999"),
        burnt.clone(),
        leaf(Some(large), tree, 4, "250"),
        leaf(None, tree, 5, "1"),
        leaf(Some(small), tree, 6, "15"),
    ];

    let mut rpc = MockRpc::default();
    rpc.add_collection(small, 25);
    rpc.add_collection(large, 1_000_350);

    let rows = classify_assets(&rpc, &PROGRAM_ID_TINY_SPL, assets)
        .await
        .unwrap();

    assert_eq!(rpc.multiple_accounts_calls(), 1);
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].collection_id, large);
    assert_eq!(rows[0].total_amount, "350");
    assert_eq!(rows[0].current_supply, Some(1_000_350));
    assert_eq!(rows[0].display_name, "Tiny Token");
    let amounts: Vec<_> = rows[0].members.iter().map(|m| m.amount.as_str()).collect();
    assert_eq!(amounts, vec!["250", "100"]);

    assert_eq!(rows[1].collection_id, small);
    assert_eq!(rows[1].total_amount, "25");

    assert!(rows
        .iter()
        .flat_map(|row| &row.members)
        .all(|member| member.id != burnt.id && !member.burnt));
}

#[tokio::test]
async fn test_classify_skips_leaves_with_invalid_amounts() {
    let tree = Pubkey::new_unique();
    let healthy = Pubkey::new_unique();
    let mixed = Pubkey::new_unique();
    let broken = Pubkey::new_unique();

    let bad = leaf(Some(mixed), tree, 1, "12.5");
    let assets = vec![
        leaf(Some(healthy), tree, 0, "7"),
        bad.clone(),
        leaf(Some(mixed), tree, 2, "30"),
        leaf(Some(broken), tree, 3, "-4"),
    ];

    let mut rpc = MockRpc::default();
    rpc.add_collection(healthy, 7);
    rpc.add_collection(mixed, 43);
    rpc.add_collection(broken, 4);

    let rows = classify_assets(&rpc, &PROGRAM_ID_TINY_SPL, assets)
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].collection_id, mixed);
    assert_eq!(rows[0].total_amount, "30");
    assert_eq!(rows[0].members.len(), 1);
    assert_ne!(rows[0].members[0].id, bad.id);
    assert_eq!(rows[1].collection_id, healthy);
    assert_eq!(rows[1].total_amount, "7");
}

#[tokio::test]
async fn test_classify_fails_when_authority_lookup_fails() {
    let collection = Pubkey::new_unique();
    let rpc = MockRpc {
        fail_multiple_accounts: true,
        ..Default::default()
    };

    let result = classify_assets(
        &rpc,
        &PROGRAM_ID_TINY_SPL,
        vec![leaf(Some(collection), Pubkey::new_unique(), 0, "1")],
    )
    .await;
    assert!(matches!(result, Err(TransitionError::Rpc(_))));
}

#[tokio::test]
async fn test_classify_without_collections_skips_lookup() {
    let rpc = MockRpc::default();
    let mut burnt = leaf(Some(Pubkey::new_unique()), Pubkey::new_unique(), 0, "1");
    burnt.burnt = true;

    let rows = classify_assets(&rpc, &PROGRAM_ID_TINY_SPL, vec![burnt])
        .await
        .unwrap();
    assert!(rows.is_empty());
    assert_eq!(rpc.calls(), 0);
}

#[tokio::test]
async fn test_fetch_collection_rows_walks_pages() {
    let collection = Pubkey::new_unique();
    let tree = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let indexer = MockIndexer {
        owner_pages: vec![
            vec![leaf(Some(collection), tree, 0, "1000")],
            vec![leaf(Some(collection), tree, 1, "24")],
        ],
        ..Default::default()
    };
    let mut rpc = MockRpc::default();
    rpc.add_collection(collection, 1024);

    let rows = fetch_collection_rows(&indexer, &rpc, &PROGRAM_ID_TINY_SPL, &owner, 45)
        .await
        .unwrap();

    // Two full pages and the terminating empty one.
    assert_eq!(indexer.calls(), 3);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_amount, "1024");
    assert_eq!(rows[0].members.len(), 2);
}
