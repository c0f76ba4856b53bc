use chrono::{DateTime, Utc};

/// The identifier claim of a revoked bearer token plus its natural
/// expiration. A token whose identifier is present here and unexpired is
/// rejected at authentication time; past its natural expiration the row is
/// retained only for the repository's own cleanup policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokedTokenId {
    token_id: String,
    expires_at: DateTime<Utc>,
}

impl RevokedTokenId {
    pub fn new(token_id: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token_id: token_id.into(),
            expires_at,
        }
    }

    pub fn token_id(&self) -> &str {
        &self.token_id
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_still_relevant_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
