//! Deterministic SHA-256 lookup-hashing for session tokens.
//!
//! Unlike a password, a session token has no other key to find its row
//! by — the repository looks sessions up by the hash of the bearer value
//! presented in the cookie. That rules out Argon2id's per-call salt: the
//! same plaintext must hash to the same digest every time.

use sha2::{Digest, Sha256};

use crate::core::usecases::ports::TokenHasher;

/// `TokenHasher` implementation over SHA-256, hex-encoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256TokenHasher;

impl TokenHasher for Sha256TokenHasher {
    fn hash_for_lookup(&self, raw: &str) -> String {
        let digest = Sha256::digest(raw.as_bytes());
        hex::encode(digest)
    }
}
