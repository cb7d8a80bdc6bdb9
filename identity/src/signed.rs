//! The transient handoff value between an identity and the ledger.

use urna_types::{PublicKey, Signature, Timestamp, VotePayload, VoterId};

/// A signed candidate selection.
///
/// Produced once by `VoterIdentity::sign_vote`, consumed once by the ledger's
/// broadcast path. The signature covers `payload.canonical_bytes()` — the
/// whole payload, nothing less.
#[derive(Clone, Debug)]
pub struct SignedBallot {
    pub voter_id: VoterId,
    pub public_key: PublicKey,
    pub payload: VotePayload,
    pub signature: Signature,
    /// When the identity issued the signature.
    pub timestamp: Timestamp,
}
