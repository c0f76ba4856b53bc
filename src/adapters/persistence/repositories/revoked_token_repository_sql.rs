/// SQL-backed implementation of `RevokedTokenRepository`.

use async_trait::async_trait;

use crate::adapters::persistence::{
    database::Database,
    error::{ExecutionError, PersistenceError},
};
use crate::core::entities::RevokedTokenId;
use crate::core::error::CoreError;
use crate::core::usecases::ports::RevokedTokenRepository;

/// SQL-backed repository for the `revoked_tokens` table.
pub struct RevokedTokenRepositorySql {
    db: Database,
}

impl RevokedTokenRepositorySql {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RevokedTokenRepository for RevokedTokenRepositorySql {
    async fn is_revoked(&self, token_id: &str) -> Result<bool, CoreError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token_id = $1 AND expires_at > CURRENT_TIMESTAMP)",
        )
        .bind(token_id)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| {
            PersistenceError::Execution(ExecutionError::query_failed(format!(
                "failed to check token revocation: {e}"
            )))
        })?;

        Ok(exists)
    }

    async fn revoke(&self, revoked: RevokedTokenId) -> Result<(), CoreError> {
        sqlx::query(
            r#"
            INSERT INTO revoked_tokens (token_id, expires_at)
            VALUES ($1, $2)
            ON CONFLICT (token_id) DO NOTHING
            "#,
        )
        .bind(revoked.token_id())
        .bind(revoked.expires_at())
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            PersistenceError::Execution(ExecutionError::query_failed(format!(
                "failed to revoke token: {e}"
            )))
        })?;

        Ok(())
    }
}
