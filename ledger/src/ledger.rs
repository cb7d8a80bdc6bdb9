//! The ledger state machine — registration, admission, batch mining,
//! chain-wide verification, and tallying.

use std::collections::HashMap;

use urna_identity::{IdentityError, SignedBallot, VoterIdentity};
use urna_types::{BlockHash, Candidate, LedgerParams, Timestamp, VotePayload, VoterId};
use urna_work::WorkGenerator;

use crate::ballot::Ballot;
use crate::block::Block;
use crate::error::{ChainError, LedgerError};

/// The outcome of a mining run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MineOutcome {
    /// The pending queue was empty; the chain is unchanged.
    NothingToMine,
    /// A block was sealed and appended; the pending queue is now empty.
    Sealed {
        index: u64,
        hash: BlockHash,
        ballots: usize,
    },
}

/// Single-process append-only ledger of signed ballots.
///
/// Every mutating operation takes `&mut self`, so exclusive access is the
/// single-writer discipline: a concurrent caller wraps the ledger in a
/// `Mutex` and holds the lock across the whole mine-and-append critical
/// section. The mining snapshot and the commit happen under one borrow, so
/// no ballot can slip in or out between them.
pub struct VoteLedger {
    chain: Vec<Block>,
    pending: Vec<Ballot>,
    voters: HashMap<VoterId, VoterIdentity>,
    params: LedgerParams,
}

impl VoteLedger {
    /// An empty ledger holding only the genesis block.
    pub fn new(params: LedgerParams) -> Self {
        Self {
            chain: vec![Block::genesis()],
            pending: Vec::new(),
            voters: HashMap::new(),
            params,
        }
    }

    pub fn params(&self) -> &LedgerParams {
        &self.params
    }

    /// The committed chain, genesis first.
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Mutable view of the chain, for integrity tooling and tamper tests.
    /// Committed blocks are otherwise frozen.
    pub fn chain_mut(&mut self) -> &mut [Block] {
        &mut self.chain
    }

    /// Ballots admitted but not yet committed.
    pub fn pending(&self) -> &[Ballot] {
        &self.pending
    }

    pub fn latest_block(&self) -> &Block {
        self.chain.last().expect("chain always holds genesis")
    }

    pub fn is_registered(&self, id: &VoterId) -> bool {
        self.voters.contains_key(id)
    }

    /// Store a voter identity. Fails if the id is already registered.
    pub fn register_voter(&mut self, identity: VoterIdentity) -> Result<(), LedgerError> {
        if self.voters.contains_key(identity.id()) {
            return Err(LedgerError::DuplicateVoter(identity.id().to_string()));
        }
        tracing::debug!(
            voter = %identity.id(),
            name = identity.display_name(),
            "voter registered"
        );
        self.voters.insert(identity.id().clone(), identity);
        Ok(())
    }

    /// Admit a signed ballot to the pending queue and return it.
    ///
    /// Rejects unregistered voters, voters whose ballot is already committed
    /// to the chain, and signatures that fail verification. The duplicate
    /// check scans only the committed chain: two valid ballots for one voter
    /// id can sit in pending together until the next mining run.
    pub fn broadcast_vote(&mut self, signed: SignedBallot) -> Result<Ballot, LedgerError> {
        if !self.voters.contains_key(&signed.voter_id) {
            return Err(LedgerError::UnknownVoter(signed.voter_id.to_string()));
        }
        if self.has_committed_ballot(&signed.voter_id) {
            return Err(LedgerError::AlreadyVoted(signed.voter_id.to_string()));
        }

        let mut ballot = Ballot::from_signed(signed);
        if !ballot.verify() {
            return Err(LedgerError::InvalidSignature(ballot.voter_id.to_string()));
        }

        tracing::debug!(
            voter = %ballot.voter_id,
            candidate = %ballot.candidate,
            "ballot admitted to pending queue"
        );
        self.pending.push(ballot.clone());
        Ok(ballot)
    }

    /// Sign and broadcast in one step for a registered voter.
    ///
    /// This is the surface a vote-submission endpoint drives with
    /// `{voterId, candidate}`. The identity-level one-shot check surfaces as
    /// `LedgerError::AlreadyVoted`, same as the chain-level check.
    pub fn cast_vote(
        &mut self,
        voter_id: &VoterId,
        candidate: impl Into<Candidate>,
    ) -> Result<Ballot, LedgerError> {
        let identity = self
            .voters
            .get_mut(voter_id)
            .ok_or_else(|| LedgerError::UnknownVoter(voter_id.to_string()))?;
        let signed = identity
            .sign_vote(VotePayload::new(candidate))
            .map_err(|err| match err {
                IdentityError::AlreadyVoted { voter } => LedgerError::AlreadyVoted(voter),
            })?;
        self.broadcast_vote(signed)
    }

    /// Seal the entire pending queue into one block and append it.
    ///
    /// Batch commit: one block per mining run, however many ballots are
    /// pending. A proof-of-work failure leaves the queue intact so the
    /// ballots can be mined again.
    pub fn mine_pending(&mut self) -> Result<MineOutcome, LedgerError> {
        if self.pending.is_empty() {
            return Ok(MineOutcome::NothingToMine);
        }

        let mut block = Block::new(
            self.chain.len() as u64,
            self.pending.clone(),
            self.latest_block().hash,
            Timestamp::now(),
        );

        let generator = WorkGenerator::new(self.params.max_mining_attempts);
        block.mine(self.params.difficulty, &generator)?;

        let outcome = MineOutcome::Sealed {
            index: block.index,
            hash: block.hash,
            ballots: block.ballots.len(),
        };
        tracing::info!(
            index = block.index,
            hash = %block.hash,
            ballots = block.ballots.len(),
            "block sealed and appended"
        );
        self.chain.push(block);
        self.pending.clear();
        Ok(outcome)
    }

    /// Walk the chain from index 1 and fail on the first broken invariant.
    ///
    /// Per block, in order: stored hash vs fresh recomputation, previous-hash
    /// link, then every ballot's signature. Re-verifying refreshes each
    /// ballot's cached `verified` flag as a side effect.
    pub fn check_chain(&mut self) -> Result<(), ChainError> {
        for position in 1..self.chain.len() {
            let (earlier, rest) = self.chain.split_at_mut(position);
            let previous = &earlier[position - 1];
            let block = &mut rest[0];

            if block.hash != block.compute_hash() {
                tracing::warn!(index = block.index, "block contents do not match stored hash");
                return Err(ChainError::TamperedBlock { index: block.index });
            }
            if block.previous_hash != previous.hash {
                tracing::warn!(index = block.index, "block is not linked to its predecessor");
                return Err(ChainError::BrokenLink { index: block.index });
            }
            for ballot in &mut block.ballots {
                if !ballot.verify() {
                    tracing::warn!(
                        index = block.index,
                        voter = %ballot.voter_id,
                        "committed ballot failed signature verification"
                    );
                    return Err(ChainError::InvalidBallot {
                        index: block.index,
                        voter: ballot.voter_id.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Boolean projection of `check_chain`.
    pub fn verify_chain(&mut self) -> bool {
        self.check_chain().is_ok()
    }

    /// Tally candidate counts over every committed ballot whose cached
    /// `verified` flag is true. The mapping is unordered.
    pub fn tally(&self) -> HashMap<Candidate, u64> {
        let mut results = HashMap::new();
        for block in &self.chain {
            for ballot in &block.ballots {
                if ballot.verified {
                    *results.entry(ballot.candidate.clone()).or_insert(0) += 1;
                }
            }
        }
        results
    }

    fn has_committed_ballot(&self, voter: &VoterId) -> bool {
        self.chain
            .iter()
            .any(|block| block.ballots.iter().any(|ballot| ballot.voter_id == *voter))
    }
}
