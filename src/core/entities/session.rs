use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::credentials::StoredCredential;

/// A session record.
///
/// Created on internal login or an external-SSO callback, revoked on
/// explicit logout, and expires by wall-clock. The session token is stored
/// hashed; the plaintext is returned to the caller exactly once, at
/// creation, and never persisted.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    token_hash: StoredCredential,
    user_id: Uuid,
    identity_provider_token: Option<String>,
    created_at: DateTime<Utc>,
    last_used_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    revoked: bool,
}

impl Session {
    pub fn new(
        id: Uuid,
        token_hash: StoredCredential,
        user_id: Uuid,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            token_hash,
            user_id,
            identity_provider_token: None,
            created_at,
            last_used_at: created_at,
            expires_at,
            revoked: false,
        }
    }

    pub fn with_identity_provider_token(mut self, token: impl Into<String>) -> Self {
        self.identity_provider_token = Some(token.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn token_hash(&self) -> &StoredCredential {
        &self.token_hash
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn identity_provider_token(&self) -> Option<&str> {
        self.identity_provider_token.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_used_at(&self) -> DateTime<Utc> {
        self.last_used_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// True when the session may still authenticate a request at `now`.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        !self.revoked && !self.is_expired_at(now)
    }

    pub fn revoke(mut self) -> Self {
        self.revoked = true;
        self
    }

    pub fn touch(mut self, at: DateTime<Utc>) -> Self {
        self.last_used_at = at;
        self
    }
}
