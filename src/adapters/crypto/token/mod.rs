//! HMAC-SHA256 token verification, plus the secret generator and token
//! hasher ports also grounded in symmetric HMAC primitives.
//!
//! # Components
//!
//! - [`HmacTokenVerifier`]: bearer-token signature and standard-claims
//!   verification, implementing the `TokenVerifier` port
//! - [`HmacKey`]: HMAC-SHA256 symmetric key generation and management
//! - [`RandSecretGenerator`]: CSPRNG-backed `SecretGenerator`
//! - [`Sha256TokenHasher`]: `TokenHasher` over plaintext session/client
//!   secrets before they're persisted
//!
//! # Example
//!
//! ```rust
//! use grid_iam_core::adapters::crypto::token::HmacKey;
//!
//! let key = HmacKey::generate().expect("Valid key");
//! ```
//!
//! # Security Considerations
//!
//! - Keys must be generated using cryptographically secure random number generators
//! - Secret keys must never be logged, transmitted, or stored insecurely
//! - Key rotation should be handled at the application level, not in this adapter

pub mod hmac_keys;
pub mod hmac_token_verifier;
pub mod secret_generator;
pub mod sha256_token_hasher;

pub use hmac_keys::{HmacKey, HMAC_KEY_SIZE};
pub use hmac_token_verifier::HmacTokenVerifier;
pub use secret_generator::RandSecretGenerator;
pub use sha256_token_hasher::Sha256TokenHasher;

#[cfg(test)]
mod tests;
