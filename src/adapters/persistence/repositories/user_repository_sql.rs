/// SQL-backed implementation of `UserRepository`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::adapters::persistence::{
    database::Database,
    error::{ExecutionError, PersistenceError},
    models::UserRow,
};
use crate::core::entities::User;
use crate::core::error::CoreError;
use crate::core::usecases::ports::UserRepository;

const SELECT_COLUMNS: &str =
    "id, subject, email, display_name, oidc_subject, disabled, created_at, updated_at";

/// SQL-backed repository for user records.
///
/// Implements queries against the `users` table.
pub struct UserRepositorySql {
    db: Database,
}

impl UserRepositorySql {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn to_entity(row: UserRow) -> User {
        let mut user = User::new(row.id, row.subject).disabled(row.disabled);
        if let Some(email) = row.email {
            user = user.with_email(email);
        }
        if let Some(display_name) = row.display_name {
            user = user.with_display_name(display_name);
        }
        if let Some(oidc_subject) = row.oidc_subject {
            user = user.with_oidc_subject(oidc_subject);
        }
        user
    }
}

#[async_trait]
impl UserRepository for UserRepositorySql {
    async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, CoreError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM users WHERE subject = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(subject)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to query user by subject: {e}"
                )))
            })?;

        Ok(row.map(Self::to_entity))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to query user by id: {e}"
                )))
            })?;

        Ok(row.map(Self::to_entity))
    }

    /// Idempotent on `subject` via an upsert: a racing second call observes
    /// the row the first call won, rather than a constraint error.
    async fn create(&self, user: User) -> Result<User, CoreError> {
        let query = format!(
            r#"
            INSERT INTO users (id, subject, email, display_name, oidc_subject, disabled, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            ON CONFLICT (subject) DO UPDATE SET subject = EXCLUDED.subject
            RETURNING {SELECT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(user.id())
            .bind(user.subject())
            .bind(user.email())
            .bind(user.display_name())
            .bind(user.oidc_subject())
            .bind(user.is_disabled())
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to create user: {e}"
                )))
            })?;

        Ok(Self::to_entity(row))
    }

    async fn set_disabled(&self, id: Uuid, disabled: bool) -> Result<(), CoreError> {
        let result = sqlx::query(
            "UPDATE users SET disabled = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(disabled)
        .bind(id)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            PersistenceError::Execution(ExecutionError::query_failed(format!(
                "failed to set user disabled flag: {e}"
            )))
        })?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found("User", id.to_string()));
        }

        Ok(())
    }
}
