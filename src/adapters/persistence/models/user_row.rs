/// Raw database row representing a user.
///
/// This maps to the `users` table. It is NOT a domain entity — it is purely
/// for database row deserialization; mapping to `core::entities::User`
/// happens in `UserRepositorySql`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: uuid::Uuid,
    pub subject: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub oidc_subject: Option<String>,
    pub disabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
