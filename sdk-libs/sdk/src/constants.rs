use solana_pubkey::{pubkey, Pubkey};

/// Default ID of the Tiny SPL program.
pub const PROGRAM_ID_TINY_SPL: Pubkey = pubkey!("tsP1jf31M3iGNPmANP3ep3iWCMTxpMFLNbewWVWWbSo");
/// ID of the Metaplex Bubblegum program which owns the compressed leaves.
pub const PROGRAM_ID_BUBBLEGUM: Pubkey = pubkey!("BGUMAp9Gq7iTEuizy4pqaxsTyUCBK68MDfK752saRPUY");
/// ID of the spl-account-compression program.
pub const PROGRAM_ID_ACCOUNT_COMPRESSION: Pubkey =
    pubkey!("cmtDvXumGCrqC1Age74AVPhSRVXJMd8PJS91L8KbNCK");
pub const PROGRAM_ID_NOOP: Pubkey = pubkey!("noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV");
/// ID of the Metaplex token-metadata program.
pub const PROGRAM_ID_TOKEN_METADATA: Pubkey =
    pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
pub const PROGRAM_ID_SYSTEM: Pubkey = pubkey!("11111111111111111111111111111111");

/// Seed of the per-collection Tiny SPL authority PDA.
pub const TINY_SPL_AUTHORITY_SEED: &[u8] = b"tiny_spl";
pub const METADATA_SEED: &[u8] = b"metadata";
pub const EDITION_SEED: &[u8] = b"edition";
pub const BUBBLEGUM_COLLECTION_CPI_SEED: &[u8] = b"collection_cpi";

/// Anchor discriminator of the `split` instruction, `sha256("global:split")[..8]`.
pub const SPLIT_DISCRIMINATOR: [u8; 8] = [124, 189, 27, 43, 216, 40, 147, 66];
/// Anchor discriminator of the `combine` instruction, `sha256("global:combine")[..8]`.
pub const COMBINE_DISCRIMINATOR: [u8; 8] = [168, 128, 202, 211, 25, 51, 52, 164];
/// Anchor discriminator of the `TinySplAuthority` account, `sha256("account:TinySplAuthority")[..8]`.
pub const TINY_SPL_AUTHORITY_DISCRIMINATOR: [u8; 8] = [95, 143, 183, 64, 102, 147, 15, 163];

pub const DEFAULT_COMPUTE_UNIT_PRICE_MICRO_LAMPORTS: u64 = 50_000;
/// Runtime maximum; proof verification cost grows with proof length and leaf count.
pub const DEFAULT_COMPUTE_UNIT_LIMIT: u32 = 1_400_000;

/// Anchor offsets user defined error codes by this value.
pub const ANCHOR_ERROR_CODE_OFFSET: u32 = 6000;
