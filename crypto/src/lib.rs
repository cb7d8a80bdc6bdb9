//! Cryptographic primitives for the urna voting ledger.
//!
//! - **Ed25519** for ballot signing and signature verification
//! - **SHA-256** for block hashes and ballot fingerprints
//!
//! Key generation pulls entropy straight from the operating system; there is
//! no key persistence or rotation — identities live for one process run.

pub mod hash;
pub mod keys;
pub mod sign;

pub use hash::{sha256, sha256_multi};
pub use keys::{generate_keypair, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
