//! Voter identities.
//!
//! A `VoterIdentity` owns an Ed25519 key pair and a single-use signing
//! capability. Signing produces a `SignedBallot`, the handoff value the
//! ledger's broadcast path consumes. The one-shot guarantee lives here, at
//! the identity level, independent of the ledger's own duplicate checks.

pub mod error;
pub mod signed;
pub mod voter;

pub use error::IdentityError;
pub use signed::SignedBallot;
pub use voter::{VoteState, VoterIdentity};
