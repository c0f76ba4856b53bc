// Core error types for the IAM domain.
//
// The taxonomy mirrors the eight failure kinds the transport layer maps to
// wire codes: a request handler (or the admin CLI, out of scope here) needs
// to know nothing about *why* a token failed to decide what to return, only
// which of these eight buckets the failure falls into.
//
// Design principles, carried over from the original auth core:
//  - No transport concepts: no HTTP status codes live in this module.
//  - Errors are values, not panics.
//  - Domain language: errors express intent, not implementation.
pub mod authentication_error;
pub mod credential_error;
pub mod token_error;
pub mod invariant_error;

pub use authentication_error::AuthenticationError;
pub use credential_error::CredentialError;
pub use token_error::TokenError;
pub use invariant_error::InvariantError;

#[cfg(test)]
mod tests;

/// The eight-kind failure taxonomy the core exposes across its whole surface.
///
/// Every public operation on the cache, resolver, evaluator and facade
/// returns either a success value or one of these variants. Transport code
/// maps each variant to a wire status; the core never does that mapping
/// itself.
#[derive(Debug, Clone)]
pub enum CoreError {
    /// Credentials were absent, malformed, or failed verification.
    Unauthenticated(AuthenticationError),
    /// The caller was identified but lacks permission for the action.
    Unauthorized { object: String, action: String },
    /// The referenced entity does not exist.
    NotFound { entity: &'static str, key: String },
    /// A uniqueness constraint would be violated.
    AlreadyExists { entity: &'static str, key: String },
    /// An optimistic-version mismatch or a safety precondition failed.
    PreconditionFailed { reason: String },
    /// The caller supplied malformed input.
    InvalidArgument { reason: String },
    /// A repository or the policy engine reported an I/O failure.
    StorageUnavailable { reason: String },
    /// The caller's context was cancelled before the operation completed.
    Cancelled,
}

impl CoreError {
    pub fn unauthorized(object: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Unauthorized {
            object: object.into(),
            action: action.into(),
        }
    }

    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn already_exists(entity: &'static str, key: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity,
            key: key.into(),
        }
    }

    pub fn precondition_failed(reason: impl Into<String>) -> Self {
        Self::PreconditionFailed {
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub fn storage_unavailable(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            reason: reason.into(),
        }
    }

    /// True for failures that must never be distinguished, on the wire,
    /// from a plain "absent credentials" response.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated(err) => write!(f, "unauthenticated: {}", err),
            Self::Unauthorized { object, action } => {
                write!(f, "unauthorized: {} on {}", action, object)
            }
            Self::NotFound { entity, key } => write!(f, "{} not found: {}", entity, key),
            Self::AlreadyExists { entity, key } => {
                write!(f, "{} already exists: {}", entity, key)
            }
            Self::PreconditionFailed { reason } => write!(f, "precondition failed: {}", reason),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {}", reason),
            Self::StorageUnavailable { reason } => write!(f, "storage unavailable: {}", reason),
            Self::Cancelled => write!(f, "operation cancelled"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<AuthenticationError> for CoreError {
    fn from(err: AuthenticationError) -> Self {
        CoreError::Unauthenticated(err)
    }
}

impl From<TokenError> for CoreError {
    fn from(err: TokenError) -> Self {
        CoreError::Unauthenticated(AuthenticationError::token_rejected(err))
    }
}

impl From<CredentialError> for CoreError {
    fn from(err: CredentialError) -> Self {
        CoreError::Unauthenticated(AuthenticationError::credential_rejected(err))
    }
}

/// `InvariantError` never crosses the public boundary as itself — it marks a
/// programmer error, not a request-path failure. The few places the core
/// observes one (a snapshot build or claims projection that violated its own
/// precondition) fold it into `StorageUnavailable` so the caller still gets
/// a typed error instead of a panic; the original detail is logged.
impl From<InvariantError> for CoreError {
    fn from(err: InvariantError) -> Self {
        CoreError::StorageUnavailable {
            reason: format!("internal invariant violated: {}", err),
        }
    }
}
