//! Bounded proof-of-work nonce search (multi-threaded CPU).

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use rayon::prelude::*;

use crate::difficulty::meets_difficulty;
use crate::error::WorkError;
use urna_types::BlockHash;

/// A nonce together with the hash it seals.
#[derive(Clone, Copy, Debug)]
pub struct SealedWork {
    pub nonce: u64,
    pub hash: BlockHash,
}

/// Searches the nonce space for a hash meeting a difficulty target.
pub struct WorkGenerator {
    max_attempts: u64,
}

/// Nonces hashed per thread between checks of the stop flag and budget.
const BATCH_SIZE: u64 = 1024;

impl WorkGenerator {
    /// A generator that gives up after `max_attempts` hashed nonces.
    pub fn new(max_attempts: u64) -> Self {
        Self { max_attempts }
    }

    /// Find a nonce whose hash carries `difficulty` leading zero hex digits.
    ///
    /// `hash_at` must recompute the full block hash for a candidate nonce.
    /// The nonce space is strided across all CPU cores; the first thread to
    /// find a valid nonce signals the others to stop. Once the shared attempt
    /// budget is spent the search fails with `WorkError::AttemptsExhausted`,
    /// so worst-case CPU consumption stays bounded for any difficulty.
    pub fn generate<F>(&self, hash_at: F, difficulty: u32) -> Result<SealedWork, WorkError>
    where
        F: Fn(u64) -> BlockHash + Sync,
    {
        if difficulty == 0 {
            return Ok(SealedWork {
                nonce: 0,
                hash: hash_at(0),
            });
        }

        let found = AtomicBool::new(false);
        let winner = AtomicU64::new(0);
        let attempts = AtomicU64::new(0);
        let num_threads = rayon::current_num_threads().max(1);

        (0..num_threads).into_par_iter().for_each(|thread_id| {
            let mut nonce = thread_id as u64;
            let stride = num_threads as u64;

            loop {
                if found.load(Ordering::Relaxed) {
                    return;
                }
                if attempts.fetch_add(BATCH_SIZE, Ordering::Relaxed) >= self.max_attempts {
                    return;
                }

                let end = nonce.saturating_add(BATCH_SIZE * stride);
                while nonce < end {
                    let hash = hash_at(nonce);
                    if meets_difficulty(&hash, difficulty) {
                        winner.store(nonce, Ordering::Relaxed);
                        found.store(true, Ordering::Relaxed);
                        return;
                    }
                    nonce = nonce.wrapping_add(stride);
                }
            }
        });

        if found.load(Ordering::Relaxed) {
            let nonce = winner.load(Ordering::Relaxed);
            Ok(SealedWork {
                nonce,
                hash: hash_at(nonce),
            })
        } else {
            Err(WorkError::AttemptsExhausted {
                attempts: self.max_attempts,
            })
        }
    }
}
