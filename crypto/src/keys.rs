//! Ed25519 key generation.

use ed25519_dalek::SigningKey;
use urna_types::{KeyPair, PrivateKey, PublicKey};

/// Generate a new Ed25519 key pair from the operating system's entropy source.
pub fn generate_keypair() -> KeyPair {
    let mut seed = [0u8; 32];
    getrandom::getrandom(&mut seed).expect("operating system RNG unavailable");
    keypair_from_seed(&seed)
}

/// Derive a key pair from a 32-byte seed (deterministic).
///
/// Used by tests that need reproducible identities.
pub fn keypair_from_seed(seed: &[u8; 32]) -> KeyPair {
    let signing_key = SigningKey::from_bytes(seed);
    let verifying_key = signing_key.verifying_key();
    KeyPair {
        public: PublicKey(verifying_key.to_bytes()),
        private: PrivateKey(signing_key.to_bytes()),
    }
}

/// Derive the public key from a private key.
pub fn public_from_private(private: &PrivateKey) -> PublicKey {
    let signing_key = SigningKey::from_bytes(&private.0);
    PublicKey(signing_key.verifying_key().to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_valid_keypair() {
        let kp = generate_keypair();
        assert_ne!(kp.public.0, [0u8; 32]);
        assert_ne!(kp.private.0, [0u8; 32]);
    }

    #[test]
    fn generate_produces_distinct_keys() {
        let kp1 = generate_keypair();
        let kp2 = generate_keypair();
        assert_ne!(kp1.public.0, kp2.public.0);
    }

    #[test]
    fn keypair_from_seed_deterministic() {
        let seed = [42u8; 32];
        let kp1 = keypair_from_seed(&seed);
        let kp2 = keypair_from_seed(&seed);
        assert_eq!(kp1.public.0, kp2.public.0);
        assert_eq!(kp1.private.0, kp2.private.0);
    }

    #[test]
    fn different_seeds_produce_different_keys() {
        let kp1 = keypair_from_seed(&[1u8; 32]);
        let kp2 = keypair_from_seed(&[2u8; 32]);
        assert_ne!(kp1.public.0, kp2.public.0);
    }

    #[test]
    fn public_from_private_matches() {
        let kp = keypair_from_seed(&[9u8; 32]);
        let derived = public_from_private(&kp.private);
        assert_eq!(kp.public.0, derived.0);
    }
}
