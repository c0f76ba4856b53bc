/// Raw database row representing a service account.
///
/// This maps to the `service_accounts` table. It is NOT a domain entity —
/// mapping to `core::entities::ServiceAccount` happens in
/// `ServiceAccountRepositorySql`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ServiceAccountRow {
    pub id: uuid::Uuid,
    pub client_id: String,
    pub secret_hash: String,
    pub disabled: bool,
    pub creator_id: uuid::Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
