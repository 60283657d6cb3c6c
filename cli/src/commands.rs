use anyhow::{bail, Context};
use futures::future::try_join_all;
use tiny_spl_client::{
    balances::{fetch_collection_rows, CollectionRow},
    confirmation::{confirm_transaction, ConfirmationOutcome},
    indexer::{DasIndexer, Indexer},
    rpc::{MerkleTreeExt, Rpc, SolanaRpcConnection},
    transaction::BuiltTransaction,
    transition::{CombineRequest, SplitRequest, TransitionBuilder, TransitionRequest},
};
use tracing::{info, warn};

use crate::cli::{BalancesArgs, CombineArgs, ConfirmArgs, SplitArgs, TreeInfoArgs};

pub async fn balances(args: BalancesArgs) -> anyhow::Result<()> {
    let rpc = SolanaRpcConnection::new(args.rpc.rpc_config());
    let indexer = DasIndexer::new(args.indexer.indexer_config(&args.rpc));

    let rows = fetch_collection_rows(
        &indexer,
        &rpc,
        &args.program_id,
        &args.owner,
        args.page_size,
    )
    .await?;
    info!("{} collections owned by {}", rows.len(), args.owner);

    for row in &rows {
        print_row(row);
    }
    Ok(())
}

fn print_row(row: &CollectionRow) {
    let supply = row
        .current_supply
        .map(|supply| supply.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{}  {} ({})  total {}  supply {}  leaves {}",
        row.collection_id,
        row.display_name,
        row.symbol,
        row.total_amount,
        supply,
        row.members.len()
    );
    for member in &row.members {
        println!(
            "    {}  {}  tree {} #{}",
            member.id, member.amount, member.tree_id, member.leaf_index
        );
    }
}

pub async fn tree_info(args: TreeInfoArgs) -> anyhow::Result<()> {
    let rpc = SolanaRpcConnection::new(args.rpc.rpc_config());
    let info = rpc.get_tree_account_info(args.tree).await?;

    println!("tree:           {}", args.tree);
    println!("authority:      {}", info.authority);
    println!("max depth:      {}", info.max_depth);
    println!("max buffer:     {}", info.max_buffer_size);
    println!("canopy depth:   {}", info.canopy_depth);
    println!("creation slot:  {}", info.creation_slot);
    Ok(())
}

pub async fn split(args: SplitArgs) -> anyhow::Result<()> {
    let rpc = SolanaRpcConnection::new(args.rpc.rpc_config());
    let indexer = DasIndexer::new(args.indexer.indexer_config(&args.rpc));
    let config = args.program.tiny_spl_config();

    let source = indexer
        .get_asset(&args.asset)
        .await
        .with_context(|| format!("Failed to fetch asset {}", args.asset))?;
    if source.owner != args.owner {
        warn!(
            "Asset {} is owned by {}, not {}",
            source.id, source.owner, args.owner
        );
    }

    let request = TransitionRequest::Split(SplitRequest {
        owner: args.owner,
        source,
        destination_amounts: args.amounts,
    });
    let built = TransitionBuilder::new(&indexer, &rpc, &config)
        .build_transaction(&request)
        .await?;
    print_transaction(&built)
}

pub async fn combine(args: CombineArgs) -> anyhow::Result<()> {
    let rpc = SolanaRpcConnection::new(args.rpc.rpc_config());
    let indexer = DasIndexer::new(args.indexer.indexer_config(&args.rpc));
    let config = args.program.tiny_spl_config();

    let sources = try_join_all(args.assets.iter().map(|id| indexer.get_asset(id)))
        .await
        .context("Failed to fetch source assets")?;
    for source in sources.iter().filter(|source| source.owner != args.owner) {
        warn!(
            "Asset {} is owned by {}, not {}",
            source.id, source.owner, args.owner
        );
    }

    let request = TransitionRequest::Combine(CombineRequest {
        owner: args.owner,
        sources,
    });
    let built = TransitionBuilder::new(&indexer, &rpc, &config)
        .build_transaction(&request)
        .await?;
    print_transaction(&built)
}

/// Prints the unsigned transaction as base64 wire bytes for an external
/// signer.
fn print_transaction(built: &BuiltTransaction) -> anyhow::Result<()> {
    let bytes = bincode::serialize(&built.transaction)?;
    println!("transaction:              {}", base64::encode(&bytes));
    println!("blockhash:                {}", built.blockhash);
    println!("last valid block height:  {}", built.last_valid_block_height);
    Ok(())
}

pub async fn confirm(args: ConfirmArgs) -> anyhow::Result<()> {
    let rpc = SolanaRpcConnection::new(args.rpc.rpc_config());
    let outcome = confirm_transaction(
        &rpc,
        &args.signature,
        args.last_valid_block_height,
        &args.confirm_config(),
    )
    .await?;

    match outcome {
        ConfirmationOutcome::Confirmed { slot } => {
            println!("{} confirmed in slot {}", args.signature, slot);
            Ok(())
        }
        ConfirmationOutcome::Failed(failure) => {
            if failure.is_retryable_with_fresh_proof() {
                warn!("Proof went stale; rebuild the transaction and resubmit");
            }
            bail!("{} failed: {}", args.signature, failure)
        }
        ConfirmationOutcome::Expired => {
            bail!("{} expired before it landed", args.signature)
        }
        ConfirmationOutcome::TimedOut => {
            bail!("Timed out waiting for {}", args.signature)
        }
    }
}
