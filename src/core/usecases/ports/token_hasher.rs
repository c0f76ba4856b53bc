//! Port for deterministic lookup-hashing of high-entropy secrets.
//!
//! Session tokens are looked up by their hash — unlike a password, there is
//! no other key to find the row by — so the hash must be deterministic,
//! unlike the salted, slow `PasswordHasher` used for service-account
//! secrets. Adapters must implement this with a fast cryptographic digest
//! (the stock adapter uses SHA-256).

pub trait TokenHasher: Send + Sync {
	/// Returns a deterministic, hex-encoded digest of `raw` suitable for use
	/// as a repository lookup key. Never reversible, but the same input
	/// always yields the same output.
	fn hash_for_lookup(&self, raw: &str) -> String;
}
