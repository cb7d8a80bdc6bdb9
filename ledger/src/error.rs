use thiserror::Error;
use urna_work::WorkError;

/// Admission-path and mining errors. All recoverable — the ledger stays
/// usable after reporting any of these.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("voter {0} is already registered")]
    DuplicateVoter(String),

    #[error("voter {0} is not registered")]
    UnknownVoter(String),

    #[error("voter {0} has already cast a vote")]
    AlreadyVoted(String),

    #[error("ballot signature for voter {0} failed verification")]
    InvalidSignature(String),

    #[error("proof-of-work failed: {0}")]
    Work(#[from] WorkError),
}

/// Integrity failures reported by the strict chain walk, each naming the
/// failing block.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("block {index} contents do not match its stored hash")]
    TamperedBlock { index: u64 },

    #[error("block {index} is not linked to its predecessor")]
    BrokenLink { index: u64 },

    #[error("block {index} holds a ballot with an invalid signature (voter {voter})")]
    InvalidBallot { index: u64, voter: String },
}
