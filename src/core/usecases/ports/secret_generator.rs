//! Port for cryptographically random secret generation.
//!
//! Used by `create-session` (session tokens) and
//! `rotate-service-account-secret` (service-account secrets). Both require
//! at least 256 bits of randomness and return the plaintext to the caller
//! exactly once.
//!
//! Adapters must implement this trait to provide a concrete CSPRNG source.

pub trait SecretGenerator: Send + Sync {
	/// Generate a new random secret of at least 256 bits, encoded for safe
	/// transport (e.g. base64url or hex).
	fn generate(&self) -> String;
}
