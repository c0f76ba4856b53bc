/// SQL-backed implementation of `RoleRepository`.

use async_trait::async_trait;
use sqlx::types::Json;
use uuid::Uuid;

use crate::adapters::persistence::{
    database::Database,
    error::{ExecutionError, PersistenceError},
    models::RoleRow,
};
use crate::core::entities::Role;
use crate::core::error::CoreError;
use crate::core::usecases::ports::RoleRepository;

const SELECT_COLUMNS: &str = "id, name, description, scope_predicate, constraints, immutable_attributes, actions, version, created_at, updated_at";

/// SQL-backed repository for role records.
///
/// Implements queries against the `roles` table, including the optimistic-
/// version check `update` relies on.
pub struct RoleRepositorySql {
    db: Database,
}

impl RoleRepositorySql {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn to_entity(row: RoleRow) -> Role {
        Role::new(row.id, row.name, row.description)
            .with_constraints(row.constraints.0)
            .with_immutable_attributes(row.immutable_attributes)
            .with_actions(row.actions)
            .with_version(row.version)
    }
}

#[async_trait]
impl RoleRepository for RoleRepositorySql {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, CoreError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM roles WHERE name = $1");
        let row = sqlx::query_as::<_, RoleRow>(&query)
            .bind(name)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to query role by name: {e}"
                )))
            })?;

        Ok(row.map(Self::to_entity))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, CoreError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM roles WHERE id = $1");
        let row = sqlx::query_as::<_, RoleRow>(&query)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to query role by id: {e}"
                )))
            })?;

        Ok(row.map(Self::to_entity))
    }

    async fn list_all(&self) -> Result<Vec<Role>, CoreError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM roles ORDER BY name");
        let rows = sqlx::query_as::<_, RoleRow>(&query)
            .fetch_all(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to list roles: {e}"
                )))
            })?;

        Ok(rows.into_iter().map(Self::to_entity).collect())
    }

    async fn create(&self, role: Role) -> Result<Role, CoreError> {
        let query = format!(
            r#"
            INSERT INTO roles (id, name, description, scope_predicate, constraints, immutable_attributes, actions, version, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING {SELECT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, RoleRow>(&query)
            .bind(role.id())
            .bind(role.name())
            .bind(role.description())
            .bind(role.scope_predicate())
            .bind(Json(role.constraints().clone()))
            .bind(role.immutable_attributes())
            .bind(role.actions())
            .bind(role.version())
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| {
                if e.to_string().contains("unique") {
                    CoreError::already_exists("Role", role.name().to_string())
                } else {
                    CoreError::from(PersistenceError::Execution(ExecutionError::query_failed(
                        format!("failed to create role: {e}"),
                    )))
                }
            })?;

        Ok(Self::to_entity(row))
    }

    /// Persists only if the stored row's version equals `expected_version`;
    /// a caller racing on a stale read observes
    /// {precondition-failed} rather than clobbering the concurrent write.
    async fn update(&self, role: Role, expected_version: i64) -> Result<Role, CoreError> {
        let query = format!(
            r#"
            UPDATE roles
            SET name = $1, description = $2, scope_predicate = $3, constraints = $4,
                immutable_attributes = $5, actions = $6, version = $7, updated_at = CURRENT_TIMESTAMP
            WHERE id = $8 AND version = $9
            RETURNING {SELECT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, RoleRow>(&query)
            .bind(role.name())
            .bind(role.description())
            .bind(role.scope_predicate())
            .bind(Json(role.constraints().clone()))
            .bind(role.immutable_attributes())
            .bind(role.actions())
            .bind(role.next_version())
            .bind(role.id())
            .bind(expected_version)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to update role: {e}"
                )))
            })?
            .ok_or_else(|| {
                CoreError::precondition_failed(format!(
                    "role {} version changed since it was read",
                    role.id()
                ))
            })?;

        Ok(Self::to_entity(row))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to delete role: {e}"
                )))
            })?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found("Role", id.to_string()));
        }

        Ok(())
    }
}
