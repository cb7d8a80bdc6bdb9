//! Ledger parameters.

use serde::{Deserialize, Serialize};

/// Tunable parameters for one ledger instance.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LedgerParams {
    /// Number of leading zero hex digits a sealed block's hash must carry.
    /// Typical demo values are 2–4.
    pub difficulty: u32,

    /// Upper bound on nonce attempts for a single mining run.
    ///
    /// Proof-of-work has no inherent termination guarantee; this cap turns a
    /// runaway search into `WorkError::AttemptsExhausted` instead of an
    /// unbounded burn. At difficulty `d` the expected cost is `16^d` attempts.
    pub max_mining_attempts: u64,
}

impl LedgerParams {
    pub const DEFAULT_DIFFICULTY: u32 = 2;
    pub const DEFAULT_MAX_MINING_ATTEMPTS: u64 = 100_000_000;

    /// Parameters with the given difficulty and the default attempt cap.
    pub fn with_difficulty(difficulty: u32) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }
}

impl Default for LedgerParams {
    fn default() -> Self {
        Self {
            difficulty: Self::DEFAULT_DIFFICULTY,
            max_mining_attempts: Self::DEFAULT_MAX_MINING_ATTEMPTS,
        }
    }
}
