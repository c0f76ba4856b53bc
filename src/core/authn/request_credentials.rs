use std::collections::HashMap;

/// Transport-agnostic credential bundle presented to the authenticator
/// chain. The HTTP adapter builds this from an incoming request's cookies
/// and `Authorization` header; no authenticator touches axum types
/// directly.
#[derive(Debug, Clone, Default)]
pub struct RequestCredentials {
    cookies: HashMap<String, String>,
    authorization_header: Option<String>,
}

impl RequestCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    pub fn with_authorization_header(mut self, header: impl Into<String>) -> Self {
        self.authorization_header = Some(header.into());
        self
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(|s| s.as_str())
    }

    pub fn authorization_header(&self) -> Option<&str> {
        self.authorization_header.as_deref()
    }

    /// Parses the `Authorization` header as `Bearer <token>`, returning the
    /// token. `None` if absent or not of that form.
    pub fn bearer_token(&self) -> Option<&str> {
        self.authorization_header
            .as_deref()
            .and_then(|header| header.strip_prefix("Bearer "))
            .filter(|token| !token.is_empty())
    }
}
