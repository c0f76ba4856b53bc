use std::collections::BTreeSet;
use std::fmt;

use uuid::Uuid;

use crate::core::error::InvariantError;

use super::PrincipalKind;

/// The authenticated identity for a single request.
///
/// Constructed once by an authenticator and never mutated afterward — there
/// are intentionally no `&mut self` methods anywhere on this type. Roles are
/// fixed at construction time: they reflect the resolver's output for the
/// groups present at authentication, and do not change even if a concurrent
/// admin refresh installs a new cache snapshot mid-request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    subject: String,
    principal_id: String,
    kind: PrincipalKind,
    internal_id: Uuid,
    email: Option<String>,
    display_name: Option<String>,
    session_id: Option<Uuid>,
    groups: Vec<String>,
    roles: BTreeSet<String>,
}

impl Principal {
    /// Builds a `Principal`, deriving `principal_id` from `kind` and
    /// `subject` and enforcing the `user:`/`sa:` prefix invariant at
    /// construction rather than by caller convention.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        subject: impl Into<String>,
        kind: PrincipalKind,
        internal_id: Uuid,
        email: Option<String>,
        display_name: Option<String>,
        session_id: Option<Uuid>,
        groups: Vec<String>,
        roles: impl IntoIterator<Item = String>,
    ) -> Result<Self, InvariantError> {
        let subject = subject.into();
        if subject.is_empty() {
            return Err(InvariantError::violated("principal subject must not be empty"));
        }
        let principal_id = format!("{}{}", kind.prefix(), subject);
        Ok(Self {
            subject,
            principal_id,
            kind,
            internal_id,
            email,
            display_name,
            session_id,
            groups,
            roles: roles.into_iter().collect(),
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The Casbin-like policy-engine subject, e.g. `user:alice@example.com`.
    pub fn principal_id(&self) -> &str {
        &self.principal_id
    }

    pub fn kind(&self) -> PrincipalKind {
        self.kind
    }

    pub fn internal_id(&self) -> Uuid {
        self.internal_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_user(&self) -> bool {
        matches!(self.kind, PrincipalKind::User)
    }

    pub fn is_service_account(&self) -> bool {
        matches!(self.kind, PrincipalKind::ServiceAccount)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.principal_id)
    }
}
