pub mod address;
pub mod constants;
pub mod error;
pub mod instruction;
pub mod merkle_tree;
pub mod state;

pub use error::{TinySplProgramError, TinySplSdkError};
pub use solana_pubkey::{self, Pubkey};
