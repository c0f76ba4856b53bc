/// Raw database rows for the two role-assignment link tables.
///
/// `user_role_assignments` maps a role directly to a user; `group_role_
/// assignments` maps a role to a group name. Mapping to
/// `core::entities::{UserRoleAssignment, GroupRoleAssignment}` happens in
/// `RoleAssignmentRepositorySql`.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserRoleAssignmentRow {
    pub user_id: uuid::Uuid,
    pub role_id: uuid::Uuid,
    pub assigned_by: uuid::Uuid,
    pub assigned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct GroupRoleAssignmentRow {
    pub group_name: String,
    pub role_id: uuid::Uuid,
    pub assigned_by: uuid::Uuid,
    pub assigned_at: DateTime<Utc>,
}
