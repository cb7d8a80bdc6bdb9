use proptest::prelude::*;

use urna_crypto::sha256_multi;
use urna_types::BlockHash;
use urna_work::{meets_difficulty, WorkGenerator};

fn hash_at(prefix: &[u8], nonce: u64) -> BlockHash {
    BlockHash::new(sha256_multi(&[prefix, &nonce.to_be_bytes()]))
}

proptest! {
    /// Generated work always passes the difficulty predicate it was mined for.
    #[test]
    fn generated_work_always_valid(
        prefix in prop::collection::vec(any::<u8>(), 1..64),
        difficulty in 0u32..=3,
    ) {
        let generator = WorkGenerator::new(10_000_000);
        let sealed = generator
            .generate(|nonce| hash_at(&prefix, nonce), difficulty)
            .unwrap();
        prop_assert!(
            meets_difficulty(&sealed.hash, difficulty),
            "sealed hash must meet its difficulty"
        );
        prop_assert_eq!(sealed.hash, hash_at(&prefix, sealed.nonce));
    }

    /// Zero difficulty always passes regardless of hash contents.
    #[test]
    fn zero_difficulty_always_passes(hash_bytes in prop::array::uniform32(0u8..)) {
        prop_assert!(meets_difficulty(&BlockHash::new(hash_bytes), 0));
    }

    /// The predicate is deterministic: same inputs produce same result.
    #[test]
    fn predicate_is_deterministic(
        hash_bytes in prop::array::uniform32(0u8..),
        difficulty in 0u32..=70,
    ) {
        let hash = BlockHash::new(hash_bytes);
        prop_assert_eq!(
            meets_difficulty(&hash, difficulty),
            meets_difficulty(&hash, difficulty)
        );
    }

    /// Lower difficulty is easier to meet: if valid at D, then valid at D-1.
    #[test]
    fn lower_difficulty_is_easier(
        hash_bytes in prop::array::uniform32(0u8..),
        difficulty in 1u32..=64,
    ) {
        let hash = BlockHash::new(hash_bytes);
        if meets_difficulty(&hash, difficulty) {
            prop_assert!(
                meets_difficulty(&hash, difficulty - 1),
                "valid at {} must imply valid at {}",
                difficulty,
                difficulty - 1
            );
        }
    }

    /// The predicate agrees with the hex rendering of the hash.
    #[test]
    fn predicate_matches_hex_rendering(
        hash_bytes in prop::array::uniform32(0u8..),
        difficulty in 0u32..=8,
    ) {
        let hash = BlockHash::new(hash_bytes);
        let rendered = format!("{hash}");
        let expected = rendered
            .chars()
            .take(difficulty as usize)
            .all(|c| c == '0');
        prop_assert_eq!(meets_difficulty(&hash, difficulty), expected);
    }
}
