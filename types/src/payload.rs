//! The vote payload — the value a voter actually signs.

use crate::voter::Candidate;
use serde::{Deserialize, Serialize};

/// Domain separation tag for signed vote payloads.
pub const PAYLOAD_DOMAIN: &[u8] = b"urna/payload/v1";

/// The candidate selection a voter signs.
///
/// Signing and signature verification both operate on `canonical_bytes()`,
/// so the whole payload — not a subset — is covered by the signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotePayload {
    pub candidate: Candidate,
}

impl VotePayload {
    pub fn new(candidate: impl Into<Candidate>) -> Self {
        Self {
            candidate: candidate.into(),
        }
    }

    /// The fixed byte encoding of this payload.
    ///
    /// Layout: `PAYLOAD_DOMAIN || len(candidate) as u32 BE || candidate UTF-8`.
    /// Changing this encoding invalidates every previously issued signature.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let candidate = self.candidate.as_str().as_bytes();
        let mut buf = Vec::with_capacity(PAYLOAD_DOMAIN.len() + 4 + candidate.len());
        buf.extend_from_slice(PAYLOAD_DOMAIN);
        buf.extend_from_slice(&(candidate.len() as u32).to_be_bytes());
        buf.extend_from_slice(candidate);
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_bytes_layout() {
        let payload = VotePayload::new("X");
        let bytes = payload.canonical_bytes();
        assert!(bytes.starts_with(PAYLOAD_DOMAIN));
        assert_eq!(&bytes[PAYLOAD_DOMAIN.len()..PAYLOAD_DOMAIN.len() + 4], &1u32.to_be_bytes());
        assert_eq!(bytes.last(), Some(&b'X'));
    }

    #[test]
    fn different_candidates_differ() {
        let a = VotePayload::new("Candidate A").canonical_bytes();
        let b = VotePayload::new("Candidate B").canonical_bytes();
        assert_ne!(a, b);
    }

    #[test]
    fn canonical_bytes_stable() {
        let payload = VotePayload::new("Candidate A");
        assert_eq!(payload.canonical_bytes(), payload.canonical_bytes());
    }
}
