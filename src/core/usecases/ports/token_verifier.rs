//! Port for bearer-token signature and standard-claims verification.
//!
//! Abstracts JWT (or any other bearer format) verification so the
//! bearer-token authenticator never touches key material or algorithm
//! details directly.
//!
//! Adapters must implement this trait to provide concrete verification
//! (e.g. HS256 against an internal HMAC secret, or RS256/EdDSA against an
//! external identity provider's published keys).

use crate::core::error::TokenError;
use crate::core::token::TokenClaims;

/// Contract for bearer-token verification.
pub trait TokenVerifier: Send + Sync {
	/// Verify the token's signature and standard claims (issuer, audience,
	/// expiration, not-before) and return its projected claims.
	fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
