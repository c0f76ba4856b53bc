/// SQL-backed implementation of `RoleAssignmentRepository`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::adapters::persistence::{
    database::Database,
    error::{ExecutionError, PersistenceError},
    models::{GroupRoleAssignmentRow, UserRoleAssignmentRow},
};
use crate::core::entities::{GroupRoleAssignment, UserRoleAssignment};
use crate::core::error::CoreError;
use crate::core::usecases::ports::RoleAssignmentRepository;

/// SQL-backed repository for the `user_role_assignments` and
/// `group_role_assignments` link tables.
pub struct RoleAssignmentRepositorySql {
    db: Database,
}

impl RoleAssignmentRepositorySql {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleAssignmentRepository for RoleAssignmentRepositorySql {
    async fn assign_user_role(&self, assignment: UserRoleAssignment) -> Result<(), CoreError> {
        sqlx::query(
            r#"
            INSERT INTO user_role_assignments (user_id, role_id, assigned_by, assigned_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
            ON CONFLICT (user_id, role_id) DO NOTHING
            "#,
        )
        .bind(assignment.user_id())
        .bind(assignment.role_id())
        .bind(assignment.assigned_by())
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            PersistenceError::Execution(ExecutionError::query_failed(format!(
                "failed to assign user role: {e}"
            )))
        })?;

        Ok(())
    }

    async fn remove_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM user_role_assignments WHERE user_id = $1 AND role_id = $2")
            .bind(user_id)
            .bind(role_id)
            .execute(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to remove user role: {e}"
                )))
            })?;

        Ok(())
    }

    async fn list_user_roles(&self, user_id: Uuid) -> Result<Vec<UserRoleAssignment>, CoreError> {
        let rows = sqlx::query_as::<_, UserRoleAssignmentRow>(
            "SELECT user_id, role_id, assigned_by, assigned_at FROM user_role_assignments WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| {
            PersistenceError::Execution(ExecutionError::query_failed(format!(
                "failed to list user roles: {e}"
            )))
        })?;

        Ok(rows
            .into_iter()
            .map(|row| UserRoleAssignment::new(row.user_id, row.role_id, row.assigned_by))
            .collect())
    }

    async fn assign_group_role(&self, assignment: GroupRoleAssignment) -> Result<(), CoreError> {
        sqlx::query(
            r#"
            INSERT INTO group_role_assignments (group_name, role_id, assigned_by, assigned_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
            ON CONFLICT (group_name, role_id) DO NOTHING
            "#,
        )
        .bind(assignment.group_name())
        .bind(assignment.role_id())
        .bind(assignment.assigned_by())
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            PersistenceError::Execution(ExecutionError::query_failed(format!(
                "failed to assign group role: {e}"
            )))
        })?;

        Ok(())
    }

    async fn remove_group_role(&self, group_name: &str, role_id: Uuid) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM group_role_assignments WHERE group_name = $1 AND role_id = $2")
            .bind(group_name)
            .bind(role_id)
            .execute(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to remove group role: {e}"
                )))
            })?;

        Ok(())
    }

    async fn list_all_group_roles(&self) -> Result<Vec<GroupRoleAssignment>, CoreError> {
        let rows = sqlx::query_as::<_, GroupRoleAssignmentRow>(
            "SELECT group_name, role_id, assigned_by, assigned_at FROM group_role_assignments",
        )
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| {
            PersistenceError::Execution(ExecutionError::query_failed(format!(
                "failed to list group role assignments: {e}"
            )))
        })?;

        Ok(rows
            .into_iter()
            .map(|row| GroupRoleAssignment::new(row.group_name, row.role_id, row.assigned_by))
            .collect())
    }

    async fn role_is_referenced(&self, role_id: Uuid) -> Result<bool, CoreError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT (
                (SELECT COUNT(*) FROM user_role_assignments WHERE role_id = $1) +
                (SELECT COUNT(*) FROM group_role_assignments WHERE role_id = $1)
            )
            "#,
        )
        .bind(role_id)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| {
            PersistenceError::Execution(ExecutionError::query_failed(format!(
                "failed to check role references: {e}"
            )))
        })?;

        Ok(count > 0)
    }
}
