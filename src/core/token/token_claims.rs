/// Bearer-token claims projected by a `TokenVerifier` adapter.
///
/// `TokenClaims` is a data-only type: it carries what a bearer token
/// asserts, not whether any of it should be trusted for authorization.
/// Signature and standard-claims verification happen in the adapter before
/// this value is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// The subject claim, verbatim. The bearer-token authenticator decides
    /// whether this is a `sa:`-prefixed service-account identifier or an
    /// external-identity-provider subject.
    pub subject: String,

    /// The token's unique identifier claim (`jti`), checked against the
    /// revocation list.
    pub token_id: String,

    /// Group names as asserted by the issuer, before any path-form
    /// stripping (`/product-engineers` vs `product-engineers`).
    pub groups: Vec<String>,

    pub issuer: String,
    pub audience: String,

    pub issued_at: String,
    pub expires_at: String,
    pub not_before: Option<String>,

    /// True when the issuer's claims signal a client-credentials grant
    /// (no human user subject) — the bearer-token authenticator's cue to
    /// treat this as a service-account principal in external-IdP mode.
    pub is_service_account: bool,
}

impl TokenClaims {
    pub fn new(
        subject: impl Into<String>,
        token_id: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        issued_at: impl Into<String>,
        expires_at: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            token_id: token_id.into(),
            groups: Vec::new(),
            issuer: issuer.into(),
            audience: audience.into(),
            issued_at: issued_at.into(),
            expires_at: expires_at.into(),
            not_before: None,
            is_service_account: false,
        }
    }

    pub fn with_groups(mut self, groups: Vec<String>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_not_before(mut self, not_before: impl Into<String>) -> Self {
        self.not_before = Some(not_before.into());
        self
    }

    pub fn as_service_account(mut self, is_service_account: bool) -> Self {
        self.is_service_account = is_service_account;
        self
    }

    /// Normalizes a group claim that may be flat names or the
    /// identity-provider's path form (`/product-engineers`), stripping a
    /// leading slash. Case is preserved: group-name comparison is
    /// case-sensitive throughout the core.
    pub fn normalized_groups(&self) -> Vec<String> {
        self.groups
            .iter()
            .map(|g| g.strip_prefix('/').unwrap_or(g).to_string())
            .collect()
    }
}
