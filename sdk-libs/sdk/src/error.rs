use solana_pubkey::Pubkey;
use thiserror::Error;

use crate::constants::ANCHOR_ERROR_CODE_OFFSET;

#[derive(Debug, Error)]
pub enum TinySplSdkError {
    #[error("Account data too short: expected at least {expected} bytes, got {actual}")]
    InvalidAccountData { expected: usize, actual: usize },
    #[error("Invalid account discriminator")]
    InvalidDiscriminator,
    #[error("Unsupported merkle tree account (type {account_type}, version {version})")]
    UnsupportedTreeHeader { account_type: u8, version: u8 },
    #[error("Unsupported merkle tree dimensions: depth {max_depth}, buffer {max_buffer_size}")]
    InvalidTreeDimensions { max_depth: u32, max_buffer_size: u32 },
    #[error("Account owned by {found}, expected {expected}")]
    InvalidAccountOwner { expected: Pubkey, found: Pubkey },
    #[error("Canopy byte length {byte_len} does not describe a complete canopy")]
    InvalidCanopy { byte_len: usize },
    #[error("Borsh error: {0}")]
    Borsh(#[from] std::io::Error),
}

/// Custom errors returned by the Tiny SPL program, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TinySplProgramError {
    MintAccountNotEmpty,
    MetadataAccountNotEmpty,
    MasterEditionAccountNotEmpty,
    LeafAuthorityMustSign,
    CollectionMismatch,
    AssetIdMismatch,
    InvalidSplitAmounts,
    CannotCombineSameAsset,
    InvalidCombineParameters,
    ExceededMaxMintSupply,
}

impl TinySplProgramError {
    const ALL: [TinySplProgramError; 10] = [
        Self::MintAccountNotEmpty,
        Self::MetadataAccountNotEmpty,
        Self::MasterEditionAccountNotEmpty,
        Self::LeafAuthorityMustSign,
        Self::CollectionMismatch,
        Self::AssetIdMismatch,
        Self::InvalidSplitAmounts,
        Self::CannotCombineSameAsset,
        Self::InvalidCombineParameters,
        Self::ExceededMaxMintSupply,
    ];

    pub fn from_code(code: u32) -> Option<Self> {
        let index = code.checked_sub(ANCHOR_ERROR_CODE_OFFSET)?;
        Self::ALL.get(index as usize).copied()
    }

    pub fn code(self) -> u32 {
        ANCHOR_ERROR_CODE_OFFSET + self as u32
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::MintAccountNotEmpty => "Mint account is not empty",
            Self::MetadataAccountNotEmpty => "Metadata account is not empty",
            Self::MasterEditionAccountNotEmpty => "Master edition account is not empty",
            Self::LeafAuthorityMustSign => "Leaf authority must sign",
            Self::CollectionMismatch => {
                "Passed in collection mint does not match the collection mint of token"
            }
            Self::AssetIdMismatch => {
                "Passed in asset id does not match the asset id derived from the merkle tree and index"
            }
            Self::InvalidSplitAmounts => "Invalid split amounts supplied",
            Self::CannotCombineSameAsset => "Cannot combine more than 1 of the same asset",
            Self::InvalidCombineParameters => {
                "Different number of parameters supplied for combining"
            }
            Self::ExceededMaxMintSupply => "Exceeded max mint supply",
        }
    }
}

impl std::fmt::Display for TinySplProgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_error_codes() {
        assert_eq!(
            TinySplProgramError::from_code(6000),
            Some(TinySplProgramError::MintAccountNotEmpty)
        );
        assert_eq!(
            TinySplProgramError::from_code(6006),
            Some(TinySplProgramError::InvalidSplitAmounts)
        );
        assert_eq!(
            TinySplProgramError::from_code(6009),
            Some(TinySplProgramError::ExceededMaxMintSupply)
        );
        assert_eq!(TinySplProgramError::ExceededMaxMintSupply.code(), 6009);
        assert_eq!(TinySplProgramError::from_code(6010), None);
        assert_eq!(TinySplProgramError::from_code(1), None);
        for error in TinySplProgramError::ALL {
            assert_eq!(TinySplProgramError::from_code(error.code()), Some(error));
        }
    }
}
