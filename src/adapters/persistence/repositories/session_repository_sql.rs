/// SQL-backed implementation of `SessionRepository`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::adapters::persistence::{
    database::Database,
    error::{ExecutionError, PersistenceError},
    models::SessionRow,
};
use crate::core::credentials::StoredCredential;
use crate::core::entities::Session;
use crate::core::error::CoreError;
use crate::core::usecases::ports::SessionRepository;

const SELECT_COLUMNS: &str =
    "id, token_hash, user_id, identity_provider_token, created_at, last_used_at, expires_at, revoked";

/// SQL-backed repository for session records.
///
/// Implements queries against the `sessions` table.
pub struct SessionRepositorySql {
    db: Database,
}

impl SessionRepositorySql {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn to_entity(row: SessionRow) -> Session {
        let mut session = Session::new(
            row.id,
            StoredCredential::from_hash(row.token_hash),
            row.user_id,
            row.created_at,
            row.expires_at,
        )
        .touch(row.last_used_at);

        if let Some(token) = row.identity_provider_token {
            session = session.with_identity_provider_token(token);
        }
        if row.revoked {
            session = session.revoke();
        }
        session
    }
}

#[async_trait]
impl SessionRepository for SessionRepositorySql {
    async fn create(&self, session: Session) -> Result<Session, CoreError> {
        let query = format!(
            r#"
            INSERT INTO sessions (id, token_hash, user_id, identity_provider_token, created_at, last_used_at, expires_at, revoked)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {SELECT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, SessionRow>(&query)
            .bind(session.id())
            .bind(session.token_hash().as_hash_str())
            .bind(session.user_id())
            .bind(session.identity_provider_token())
            .bind(session.created_at())
            .bind(session.last_used_at())
            .bind(session.expires_at())
            .bind(session.is_revoked())
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to create session: {e}"
                )))
            })?;

        Ok(Self::to_entity(row))
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, CoreError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM sessions WHERE token_hash = $1");
        let row = sqlx::query_as::<_, SessionRow>(&query)
            .bind(token_hash)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to query session by token hash: {e}"
                )))
            })?;

        Ok(row.map(Self::to_entity))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, CoreError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM sessions WHERE id = $1");
        let row = sqlx::query_as::<_, SessionRow>(&query)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to query session by id: {e}"
                )))
            })?;

        Ok(row.map(Self::to_entity))
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Session>, CoreError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM sessions WHERE user_id = $1");
        let rows = sqlx::query_as::<_, SessionRow>(&query)
            .bind(user_id)
            .fetch_all(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to list sessions for user: {e}"
                )))
            })?;

        Ok(rows.into_iter().map(Self::to_entity).collect())
    }

    async fn revoke(&self, id: Uuid) -> Result<(), CoreError> {
        let result = sqlx::query("UPDATE sessions SET revoked = TRUE WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to revoke session: {e}"
                )))
            })?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found("Session", id.to_string()));
        }

        Ok(())
    }

    /// Best-effort; a failed touch must never surface as a request failure,
    /// so callers typically ignore the error this returns.
    async fn touch(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), CoreError> {
        sqlx::query("UPDATE sessions SET last_used_at = $1 WHERE id = $2")
            .bind(at)
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to touch session: {e}"
                )))
            })?;

        Ok(())
    }
}
