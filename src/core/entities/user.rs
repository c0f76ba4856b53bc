use uuid::Uuid;

/// A user record.
///
/// Created on first successful external login (just-in-time) or by internal
/// registration. Deletion is the only terminal lifecycle event; a disabled
/// user cannot authenticate but its historical sessions remain honored until
/// individually revoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    subject: String,
    email: Option<String>,
    display_name: Option<String>,
    oidc_subject: Option<String>,
    disabled: bool,
}

impl User {
    pub fn new(id: Uuid, subject: impl Into<String>) -> Self {
        Self {
            id,
            subject: subject.into(),
            email: None,
            display_name: None,
            oidc_subject: None,
            disabled: false,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_oidc_subject(mut self, oidc_subject: impl Into<String>) -> Self {
        self.oidc_subject = Some(oidc_subject.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn oidc_subject(&self) -> Option<&str> {
        self.oidc_subject.as_deref()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// True when this row was provisioned from an external identity
    /// provider rather than internal registration.
    pub fn is_externally_provisioned(&self) -> bool {
        self.oidc_subject.is_some()
    }
}
