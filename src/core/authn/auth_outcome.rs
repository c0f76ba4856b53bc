use crate::core::error::AuthenticationError;
use crate::core::identity::Principal;

/// The three outcomes a single authenticator in the chain may produce.
///
/// An authenticator never produces {unauthorized} — only the policy
/// evaluator does. A storage failure during an authenticator's own lookups
/// is not modeled here; it propagates as `CoreError::StorageUnavailable`
/// from `Authenticator::authenticate` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// No credentials this authenticator recognizes were presented; the
    /// chain proceeds to the next authenticator.
    Declined,
    /// Valid credentials; the chain stops and returns the Principal.
    Authenticated(Principal),
    /// Credentials were recognized but invalid; the chain stops.
    Failed(AuthenticationError),
}
