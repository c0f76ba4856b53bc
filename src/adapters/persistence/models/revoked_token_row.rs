/// Raw database row representing a revoked bearer-token identifier.
///
/// This maps to the `revoked_tokens` table. Mapping to
/// `core::entities::RevokedTokenId` happens in `RevokedTokenRepositorySql`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct RevokedTokenRow {
    pub token_id: String,
    pub expires_at: DateTime<Utc>,
}
