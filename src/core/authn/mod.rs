//! The authenticator chain: converts transport-agnostic request credentials
//! into a `Principal`, per spec §4.2.
//!
//! Two authenticators ship: `SessionCookieAuthenticator` validates the
//! webapp's session cookie, `BearerTokenAuthenticator` validates a
//! machine-to-machine or external-identity-provider bearer token. Neither
//! authenticator ever produces {unauthorized} — only the policy evaluator
//! does.

pub mod auth_outcome;
pub mod authenticator;
pub mod authenticator_chain;
pub mod bearer_token_authenticator;
pub mod request_credentials;
pub mod session_cookie_authenticator;

pub use auth_outcome::AuthOutcome;
pub use authenticator::{Authenticator, AuthenticatorKind};
pub use authenticator_chain::AuthenticatorChain;
pub use bearer_token_authenticator::BearerTokenAuthenticator;
pub use request_credentials::RequestCredentials;
pub use session_cookie_authenticator::SessionCookieAuthenticator;

#[cfg(test)]
mod tests;
