//! Fundamental types for the urna voting ledger.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: voter identifiers, hashes, key material, vote payloads,
//! timestamps, and ledger parameters.

pub mod hash;
pub mod keys;
pub mod params;
pub mod payload;
mod serde_hex;
pub mod time;
pub mod voter;

pub use hash::{BallotHash, BlockHash};
pub use keys::{KeyPair, PrivateKey, PublicKey, Signature};
pub use params::LedgerParams;
pub use payload::VotePayload;
pub use time::Timestamp;
pub use voter::{Candidate, VoterId};
