use async_trait::async_trait;

use crate::core::error::CoreError;

use super::{AuthOutcome, RequestCredentials};

/// A single link in the authenticator chain: converts a credential bundle
/// into one of three outcomes, or fails with a storage error if a
/// repository lookup it needed could not complete.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &RequestCredentials) -> Result<AuthOutcome, CoreError>;

    /// Used only for config-driven chain ordering and diagnostics.
    fn kind(&self) -> AuthenticatorKind;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticatorKind {
    SessionCookie,
    BearerToken,
}
