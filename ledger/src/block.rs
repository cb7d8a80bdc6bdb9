//! A proof-of-work-sealed batch of ballots.

use serde::{Deserialize, Serialize};
use urna_crypto::sha256_multi;
use urna_types::{BlockHash, Timestamp};
use urna_work::{SealedWork, WorkError, WorkGenerator};

use crate::ballot::Ballot;

/// Domain separation tag for block preimages.
const BLOCK_DOMAIN: &[u8] = b"urna/block/v1";

/// An ordered batch of ballots plus chain linkage and proof-of-work.
///
/// A block is mutated only while mining; once appended to the chain it is
/// frozen. Serializes with camelCase field names to match the documented
/// interchange shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub index: u64,
    pub ballots: Vec<Ballot>,
    pub previous_hash: BlockHash,
    pub timestamp: Timestamp,
    pub nonce: u64,
    pub hash: BlockHash,
}

impl Block {
    /// A block stamped `now`, nonce zero, hash computed over the fresh fields.
    pub fn new(
        index: u64,
        ballots: Vec<Ballot>,
        previous_hash: BlockHash,
        now: Timestamp,
    ) -> Self {
        let mut block = Self {
            index,
            ballots,
            previous_hash,
            timestamp: now,
            nonce: 0,
            hash: BlockHash::ZERO,
        };
        block.hash = block.compute_hash();
        block
    }

    /// The chain's first block: zero ballots, zero previous hash, epoch
    /// timestamp. Never mined, so every ledger starts from the same hash.
    pub fn genesis() -> Self {
        Self::new(0, Vec::new(), BlockHash::ZERO, Timestamp::EPOCH)
    }

    /// Recompute this block's hash from its current fields.
    ///
    /// Preimage layout: `BLOCK_DOMAIN || index:u64 || previous_hash:32 ||
    /// timestamp_ms:u64 || ballot_count:u32 || ballot records || nonce:u64`,
    /// integers big-endian. The nonce comes last so mining can reuse the
    /// prefix bytes across attempts.
    pub fn compute_hash(&self) -> BlockHash {
        BlockHash::new(sha256_multi(&[
            &self.preimage_prefix(),
            &self.nonce.to_be_bytes(),
        ]))
    }

    fn preimage_prefix(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(BLOCK_DOMAIN);
        buf.extend_from_slice(&self.index.to_be_bytes());
        buf.extend_from_slice(self.previous_hash.as_bytes());
        buf.extend_from_slice(&self.timestamp.as_millis().to_be_bytes());
        buf.extend_from_slice(&(self.ballots.len() as u32).to_be_bytes());
        for ballot in &self.ballots {
            ballot.encode_into(&mut buf);
        }
        buf
    }

    /// Search for a nonce giving the hash `difficulty` leading zero hex digits.
    ///
    /// On success the block's nonce and hash are updated in place; on failure
    /// the block is left untouched.
    pub fn mine(&mut self, difficulty: u32, generator: &WorkGenerator) -> Result<(), WorkError> {
        let prefix = self.preimage_prefix();
        let SealedWork { nonce, hash } = generator.generate(
            |nonce| BlockHash::new(sha256_multi(&[&prefix, &nonce.to_be_bytes()])),
            difficulty,
        )?;
        self.nonce = nonce;
        self.hash = hash;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urna_identity::VoterIdentity;
    use urna_types::VotePayload;
    use urna_work::meets_difficulty;

    fn sample_ballots() -> Vec<Ballot> {
        let mut identity = VoterIdentity::from_seed("V001", "Alice", &[1u8; 32]);
        let signed = identity
            .sign_vote_at(
                VotePayload::new("Candidate A"),
                Timestamp::new(1_700_000_000_000),
            )
            .unwrap();
        vec![Ballot::from_signed(signed)]
    }

    #[test]
    fn genesis_is_deterministic() {
        let g1 = Block::genesis();
        let g2 = Block::genesis();
        assert_eq!(g1.hash, g2.hash);
        assert_eq!(g1.index, 0);
        assert!(g1.ballots.is_empty());
        assert!(g1.previous_hash.is_zero());
        assert_eq!(g1.timestamp, Timestamp::EPOCH);
    }

    #[test]
    fn stored_hash_matches_recomputation() {
        let block = Block::new(
            1,
            sample_ballots(),
            Block::genesis().hash,
            Timestamp::new(1_700_000_000_001),
        );
        assert_eq!(block.hash, block.compute_hash());
    }

    #[test]
    fn hash_covers_every_stored_field() {
        let base = Block::new(
            1,
            sample_ballots(),
            Block::genesis().hash,
            Timestamp::new(1_700_000_000_001),
        );

        let mut tampered = base.clone();
        tampered.timestamp = Timestamp::new(1_700_000_000_002);
        assert_ne!(tampered.compute_hash(), base.hash);

        let mut tampered = base.clone();
        tampered.nonce = 7;
        assert_ne!(tampered.compute_hash(), base.hash);

        let mut tampered = base.clone();
        tampered.ballots[0].candidate = "Candidate B".into();
        assert_ne!(tampered.compute_hash(), base.hash);
    }

    #[test]
    fn hash_ignores_verified_cache() {
        let mut block = Block::new(
            1,
            sample_ballots(),
            Block::genesis().hash,
            Timestamp::new(1_700_000_000_001),
        );
        let before = block.compute_hash();
        block.ballots[0].verify();
        assert_eq!(block.compute_hash(), before);
    }

    #[test]
    fn mining_meets_difficulty() {
        for difficulty in 0..=3 {
            let mut block = Block::new(
                1,
                sample_ballots(),
                Block::genesis().hash,
                Timestamp::new(1_700_000_000_001),
            );
            let generator = WorkGenerator::new(10_000_000);
            block.mine(difficulty, &generator).unwrap();
            assert!(meets_difficulty(&block.hash, difficulty));
            assert_eq!(block.hash, block.compute_hash());
        }
    }

    #[test]
    fn failed_mining_leaves_block_untouched() {
        let mut block = Block::new(
            1,
            sample_ballots(),
            Block::genesis().hash,
            Timestamp::new(1_700_000_000_001),
        );
        let before = block.clone();
        let generator = WorkGenerator::new(1024);
        assert!(block.mine(64, &generator).is_err());
        assert_eq!(block.nonce, before.nonce);
        assert_eq!(block.hash, before.hash);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let block = Block::genesis();
        let json = serde_json::to_value(&block).unwrap();
        assert!(json.get("previousHash").is_some());
        assert!(json.get("nonce").is_some());
        assert!(json.get("ballots").is_some());
    }
}
