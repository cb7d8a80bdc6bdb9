//! A committed ballot and its verification logic.

use serde::{Deserialize, Serialize};
use urna_crypto::{sha256_multi, verify_signature};
use urna_identity::SignedBallot;
use urna_types::{BallotHash, Candidate, PublicKey, Signature, Timestamp, VotePayload, VoterId};

/// Domain separation tag for ballot fingerprints.
const FINGERPRINT_DOMAIN: &[u8] = b"urna/ballot/v1";

/// A candidate selection cryptographically bound to a voter.
///
/// Created when a signed ballot is admitted to the ledger. Serializes with
/// camelCase field names so a persisted chain matches the documented
/// interchange shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ballot {
    pub voter_id: VoterId,
    pub candidate: Candidate,
    pub signature: Signature,
    pub public_key: PublicKey,
    pub timestamp: Timestamp,
    /// Cached result of the most recent `verify` run. Excluded from every
    /// hash and signature; refreshed whenever verification runs.
    pub verified: bool,
}

impl Ballot {
    /// Build a ballot from the signed handoff value. Starts unverified.
    pub fn from_signed(signed: SignedBallot) -> Self {
        Self {
            voter_id: signed.voter_id,
            candidate: signed.payload.candidate,
            signature: signed.signature,
            public_key: signed.public_key,
            timestamp: signed.timestamp,
            verified: false,
        }
    }

    /// Check the signature against the full payload the voter signed,
    /// without touching the cache.
    ///
    /// The payload is reconstructed from the stored candidate through the
    /// same canonical encoding used at signing time — narrowing either side
    /// would make tampering outside the narrowed scope undetectable.
    pub fn check_signature(&self) -> bool {
        let payload = VotePayload::new(self.candidate.clone());
        verify_signature(
            &payload.canonical_bytes(),
            &self.signature,
            &self.public_key,
        )
    }

    /// Re-run signature verification and cache the result.
    ///
    /// Never fails: any underlying cryptographic failure maps to `false`.
    pub fn verify(&mut self) -> bool {
        self.verified = self.check_signature();
        self.verified
    }

    /// A pure hash over (voter id, candidate, timestamp).
    ///
    /// Informational only — not used for chain linkage.
    pub fn fingerprint(&self) -> BallotHash {
        let voter = self.voter_id.as_str().as_bytes();
        let candidate = self.candidate.as_str().as_bytes();
        BallotHash::new(sha256_multi(&[
            FINGERPRINT_DOMAIN,
            &(voter.len() as u32).to_be_bytes(),
            voter,
            &(candidate.len() as u32).to_be_bytes(),
            candidate,
            &self.timestamp.as_millis().to_be_bytes(),
        ]))
    }

    /// Append this ballot's canonical record to a block preimage.
    ///
    /// Layout: `len(voter_id) || voter_id || len(candidate) || candidate ||
    /// timestamp_ms:u64 || public_key:32 || signature:64`, integers
    /// big-endian, lengths `u32`. The `verified` cache is excluded so that
    /// re-verification cannot disturb block hashes.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        let voter = self.voter_id.as_str().as_bytes();
        let candidate = self.candidate.as_str().as_bytes();
        buf.extend_from_slice(&(voter.len() as u32).to_be_bytes());
        buf.extend_from_slice(voter);
        buf.extend_from_slice(&(candidate.len() as u32).to_be_bytes());
        buf.extend_from_slice(candidate);
        buf.extend_from_slice(&self.timestamp.as_millis().to_be_bytes());
        buf.extend_from_slice(self.public_key.as_bytes());
        buf.extend_from_slice(self.signature.as_bytes());
    }
}
