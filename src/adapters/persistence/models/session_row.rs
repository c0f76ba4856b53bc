/// Raw database row representing a session.
///
/// This maps to the `sessions` table. It is NOT a domain entity — it is
/// purely for database row deserialization; mapping to
/// `core::entities::Session` happens in `SessionRepositorySql`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub id: uuid::Uuid,
    pub token_hash: String,
    pub user_id: uuid::Uuid,
    pub identity_provider_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_used_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

impl SessionRow {
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        !self.revoked && now < self.expires_at
    }
}
