//! Voter identity — an owned key pair with one-shot signing.

use urna_crypto::{generate_keypair, keypair_from_seed, sign_message};
use urna_types::{KeyPair, PublicKey, Timestamp, VotePayload, VoterId};

use crate::error::IdentityError;
use crate::signed::SignedBallot;

/// Whether an identity has spent its single signing capability.
///
/// The transition `NotVoted -> Voted` is irreversible for the process
/// lifetime; there is no API that flips it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteState {
    NotVoted,
    Voted,
}

/// A voter with a cryptographic identity.
///
/// The private key is exclusively owned by this value and never leaves it;
/// the only operation that touches it is `sign_vote`.
pub struct VoterIdentity {
    id: VoterId,
    display_name: String,
    keypair: KeyPair,
    state: VoteState,
}

impl VoterIdentity {
    /// Register a new identity with a freshly generated Ed25519 key pair.
    pub fn register(id: impl Into<VoterId>, display_name: impl Into<String>) -> Self {
        Self::with_keypair(id, display_name, generate_keypair())
    }

    /// Deterministic identity derived from a fixed seed, for tests and fixtures.
    pub fn from_seed(
        id: impl Into<VoterId>,
        display_name: impl Into<String>,
        seed: &[u8; 32],
    ) -> Self {
        Self::with_keypair(id, display_name, keypair_from_seed(seed))
    }

    fn with_keypair(
        id: impl Into<VoterId>,
        display_name: impl Into<String>,
        keypair: KeyPair,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            keypair,
            state: VoteState::NotVoted,
        }
    }

    pub fn id(&self) -> &VoterId {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.keypair.public
    }

    pub fn state(&self) -> VoteState {
        self.state
    }

    pub fn has_voted(&self) -> bool {
        self.state == VoteState::Voted
    }

    /// Sign a vote payload, spending this identity's one signing use.
    ///
    /// Fails with `IdentityError::AlreadyVoted` on every call after the first.
    pub fn sign_vote(&mut self, payload: VotePayload) -> Result<SignedBallot, IdentityError> {
        self.sign_vote_at(payload, Timestamp::now())
    }

    /// `sign_vote` with an explicit issue timestamp.
    pub fn sign_vote_at(
        &mut self,
        payload: VotePayload,
        now: Timestamp,
    ) -> Result<SignedBallot, IdentityError> {
        if self.state == VoteState::Voted {
            return Err(IdentityError::AlreadyVoted {
                voter: self.id.to_string(),
            });
        }

        let signature = sign_message(&payload.canonical_bytes(), &self.keypair.private);
        self.state = VoteState::Voted;

        Ok(SignedBallot {
            voter_id: self.id.clone(),
            public_key: self.keypair.public.clone(),
            payload,
            signature,
            timestamp: now,
        })
    }
}
