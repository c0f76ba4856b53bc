/// Raw database row representing a role.
///
/// This maps to the `roles` table. Constraints and immutable attributes are
/// stored as JSON; actions as a plain text array. Mapping to
/// `core::entities::Role` happens in `RoleRepositorySql`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct RoleRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub description: String,
    pub scope_predicate: Option<String>,
    pub constraints: sqlx::types::Json<BTreeMap<String, String>>,
    pub immutable_attributes: Vec<String>,
    pub actions: Vec<String>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
