//! Append-only voting ledger.
//!
//! Signed ballots are admitted to a pending queue, sealed in batches into
//! proof-of-work blocks, and chained by hash. Any party holding the ledger
//! can re-verify every block hash, every link, and every ballot signature,
//! then tally the verified ballots. One process, one chain — there is no
//! replication and no durable storage here.

pub mod ballot;
pub mod block;
pub mod error;
pub mod ledger;

pub use ballot::Ballot;
pub use block::Block;
pub use error::{ChainError, LedgerError};
pub use ledger::{MineOutcome, VoteLedger};
