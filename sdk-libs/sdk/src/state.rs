use borsh::{BorshDeserialize, BorshSerialize};
use solana_pubkey::Pubkey;

use crate::{constants::TINY_SPL_AUTHORITY_DISCRIMINATOR, error::TinySplSdkError};

/// Per-collection authority account of the Tiny SPL program. Its existence
/// marks a collection as a Tiny SPL token.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct TinySplAuthority {
    pub is_verified_tiny_spl_mint: bool,
    pub current_supply: u64,
    pub mint_authority: Option<[u8; 32]>,
}

impl TinySplAuthority {
    pub fn deserialize_account(data: &[u8]) -> Result<Self, TinySplSdkError> {
        if data.len() < TINY_SPL_AUTHORITY_DISCRIMINATOR.len() {
            return Err(TinySplSdkError::InvalidAccountData {
                expected: TINY_SPL_AUTHORITY_DISCRIMINATOR.len(),
                actual: data.len(),
            });
        }
        let (discriminator, mut rest) = data.split_at(TINY_SPL_AUTHORITY_DISCRIMINATOR.len());
        if discriminator != TINY_SPL_AUTHORITY_DISCRIMINATOR {
            return Err(TinySplSdkError::InvalidDiscriminator);
        }
        Ok(Self::deserialize(&mut rest)?)
    }

    pub fn mint_authority(&self) -> Option<Pubkey> {
        self.mint_authority.map(Pubkey::new_from_array)
    }
}
