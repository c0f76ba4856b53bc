use std::fmt;

/// Discriminates the kind of identity a `Principal` was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrincipalKind {
    User,
    ServiceAccount,
}

impl PrincipalKind {
    /// The Casbin-like prefix this kind contributes to a principal identifier.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::User => "user:",
            Self::ServiceAccount => "sa:",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::ServiceAccount => write!(f, "service-account"),
        }
    }
}
