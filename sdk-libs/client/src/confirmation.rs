use std::time::Duration;

use solana_commitment_config::CommitmentConfig;
use solana_instruction::error::InstructionError;
use solana_signature::Signature;
use solana_transaction_error::TransactionError;
use tiny_spl_sdk::TinySplProgramError;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::rpc::{Rpc, RpcError};

/// `ConcurrentMerkleTreeError` of spl-account-compression: the root or proof
/// no longer matches the tree.
pub const COMPRESSION_TREE_MISMATCH_CODE: u32 = 6001;

#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    pub timeout: Duration,
    pub poll_interval: Duration,
    pub commitment: CommitmentConfig,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(90),
            poll_interval: Duration::from_secs(2),
            commitment: CommitmentConfig::confirmed(),
        }
    }
}

/// On-chain rejection of a submitted transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionFailure {
    pub instruction_index: Option<u8>,
    pub custom_code: Option<u32>,
    pub error: TransactionError,
}

impl TransitionFailure {
    pub fn new(error: TransactionError) -> Self {
        let (instruction_index, custom_code) = match &error {
            TransactionError::InstructionError(index, InstructionError::Custom(code)) => {
                (Some(*index), Some(*code))
            }
            TransactionError::InstructionError(index, _) => (Some(*index), None),
            _ => (None, None),
        };
        Self {
            instruction_index,
            custom_code,
            error,
        }
    }

    /// Reads the custom code as a Tiny SPL program error. Failures inside
    /// bubblegum or the compression program surface under the same outer
    /// instruction and share the Anchor code range.
    pub fn program_error(&self) -> Option<TinySplProgramError> {
        self.custom_code.and_then(TinySplProgramError::from_code)
    }

    /// The tree changed between proof fetch and execution.
    pub fn is_retryable_with_fresh_proof(&self) -> bool {
        matches!(
            self.custom_code,
            Some(code) if code == COMPRESSION_TREE_MISMATCH_CODE
                || code == TinySplProgramError::AssetIdMismatch.code()
        )
    }
}

impl std::fmt::Display for TransitionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.program_error() {
            Some(program_error) => write!(f, "{} ({})", self.error, program_error),
            None => write!(f, "{}", self.error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    Confirmed { slot: u64 },
    Failed(TransitionFailure),
    /// The blockhash expired before the signature was seen.
    Expired,
    TimedOut,
}

/// Polls the signature status until it lands, fails, its blockhash expires or
/// `config.timeout` elapses. Never resubmits.
pub async fn confirm_transaction<R: Rpc>(
    rpc: &R,
    signature: &Signature,
    last_valid_block_height: u64,
    config: &ConfirmConfig,
) -> Result<ConfirmationOutcome, RpcError> {
    let start = Instant::now();
    loop {
        let status = rpc
            .get_signature_statuses(&[*signature])
            .await?
            .into_iter()
            .next()
            .flatten();

        if let Some(status) = status {
            if let Some(err) = &status.err {
                let failure = TransitionFailure::new(err.clone());
                warn!("Transaction {} failed: {}", signature, failure);
                return Ok(ConfirmationOutcome::Failed(failure));
            }
            if status.satisfies_commitment(config.commitment) {
                info!("Transaction {} confirmed in slot {}", signature, status.slot);
                return Ok(ConfirmationOutcome::Confirmed { slot: status.slot });
            }
            debug!(
                "Transaction {} at {:?}",
                signature, status.confirmation_status
            );
        } else {
            let block_height = rpc.get_block_height().await?;
            if block_height > last_valid_block_height {
                warn!(
                    "Blockhash of {} expired at block height {}",
                    signature, block_height
                );
                return Ok(ConfirmationOutcome::Expired);
            }
        }

        if start.elapsed() >= config.timeout {
            return Ok(ConfirmationOutcome::TimedOut);
        }
        sleep(config.poll_interval).await;
    }
}
