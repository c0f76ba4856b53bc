/// Errors related to authentication failures.
///
/// This error type answers the question: "Could the identity be proven?"
/// Per the chain contract, an authenticator never produces anything richer
/// than one of these variants — it never decides authorization.
use super::{CredentialError, TokenError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// No authenticator in the chain recognized the credential material.
    NoCredentialsPresented,
    /// A bearer token was rejected; see the wrapped `TokenError` for detail.
    TokenRejected(TokenError),
    /// An internal-login credential was rejected; see the wrapped
    /// `CredentialError` for detail.
    CredentialRejected(CredentialError),
    /// The session cookie did not resolve to a known, live session.
    SessionNotFound,
    /// The session exists but has expired.
    SessionExpired,
    /// The session exists but was explicitly revoked.
    SessionRevoked,
    /// The bearer token's identifier claim is present in the revocation list.
    TokenRevoked,
    /// The owning user or service account is disabled.
    PrincipalDisabled { subject: String },
    /// The referenced user or service account could not be resolved.
    UnknownPrincipal { subject: String },
}

impl AuthenticationError {
    pub fn token_rejected(err: TokenError) -> Self {
        Self::TokenRejected(err)
    }

    pub fn credential_rejected(err: CredentialError) -> Self {
        Self::CredentialRejected(err)
    }

    pub fn principal_disabled(subject: impl Into<String>) -> Self {
        Self::PrincipalDisabled {
            subject: subject.into(),
        }
    }

    pub fn unknown_principal(subject: impl Into<String>) -> Self {
        Self::UnknownPrincipal {
            subject: subject.into(),
        }
    }

    pub fn is_token_revoked(&self) -> bool {
        matches!(self, Self::TokenRevoked)
    }

    pub fn is_principal_disabled(&self) -> bool {
        matches!(self, Self::PrincipalDisabled { .. })
    }
}

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCredentialsPresented => write!(f, "no credentials presented"),
            Self::TokenRejected(err) => write!(f, "token rejected: {}", err),
            Self::CredentialRejected(err) => write!(f, "credential rejected: {}", err),
            Self::SessionNotFound => write!(f, "session not found"),
            Self::SessionExpired => write!(f, "session expired"),
            Self::SessionRevoked => write!(f, "session revoked"),
            Self::TokenRevoked => write!(f, "token revoked"),
            Self::PrincipalDisabled { subject } => write!(f, "principal disabled: {}", subject),
            Self::UnknownPrincipal { subject } => write!(f, "unknown principal: {}", subject),
        }
    }
}
