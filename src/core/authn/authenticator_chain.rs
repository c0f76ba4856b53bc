use std::sync::Arc;

use crate::core::error::CoreError;
use crate::core::identity::Principal;

use super::{AuthOutcome, Authenticator, RequestCredentials};

/// Walks an ordered list of authenticators, stopping at the first that
/// declines to decline (i.e. authenticates or fails).
///
/// The default order places the session-cookie authenticator before the
/// bearer-token authenticator: cookies, when present, are the webapp's
/// intended credential, and a stray `Authorization` header must not bypass
/// a rejected session.
pub struct AuthenticatorChain {
    authenticators: Vec<Arc<dyn Authenticator>>,
}

impl AuthenticatorChain {
    pub fn new(authenticators: Vec<Arc<dyn Authenticator>>) -> Self {
        Self { authenticators }
    }

    /// Returns `Ok(Some(principal))` on success, `Ok(None)` when every
    /// authenticator declined (no credentials of any recognized kind were
    /// presented), or `Err` when one authenticator's credentials were
    /// recognized but rejected, or a repository lookup failed.
    pub async fn authenticate(&self, credentials: &RequestCredentials) -> Result<Option<Principal>, CoreError> {
        for authenticator in &self.authenticators {
            match authenticator.authenticate(credentials).await? {
                AuthOutcome::Declined => continue,
                AuthOutcome::Authenticated(principal) => return Ok(Some(principal)),
                AuthOutcome::Failed(err) => return Err(CoreError::Unauthenticated(err)),
            }
        }
        Ok(None)
    }
}
