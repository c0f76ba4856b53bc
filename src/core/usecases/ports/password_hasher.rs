//! Port for password and service-account-secret hashing.
//!
//! Abstracts hashing and verification so the core never touches Argon2
//! parameters directly.
//!
//! Adapters must implement this trait to provide a concrete hashing
//! algorithm.

use crate::core::credentials::StoredCredential;

pub trait PasswordHasher: Send + Sync {
	/// Hash a raw secret and return a stored credential.
	fn hash(&self, raw: &str) -> StoredCredential;

	/// Verify a raw secret against a stored credential.
	fn verify(&self, raw: &str, stored: &StoredCredential) -> bool;
}
