/// SQL-backed implementation of `ServiceAccountRepository`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::adapters::persistence::{
    database::Database,
    error::{ExecutionError, PersistenceError},
    models::ServiceAccountRow,
};
use crate::core::credentials::StoredCredential;
use crate::core::entities::ServiceAccount;
use crate::core::error::CoreError;
use crate::core::usecases::ports::ServiceAccountRepository;

const SELECT_COLUMNS: &str = "id, client_id, secret_hash, disabled, creator_id, created_at, updated_at";

/// SQL-backed repository for service-account records.
///
/// Implements queries against the `service_accounts` table.
pub struct ServiceAccountRepositorySql {
    db: Database,
}

impl ServiceAccountRepositorySql {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn to_entity(row: ServiceAccountRow) -> ServiceAccount {
        ServiceAccount::new(
            row.id,
            row.client_id,
            StoredCredential::from_hash(row.secret_hash),
            row.creator_id,
        )
        .disabled(row.disabled)
    }
}

#[async_trait]
impl ServiceAccountRepository for ServiceAccountRepositorySql {
    async fn find_by_client_id(&self, client_id: &str) -> Result<Option<ServiceAccount>, CoreError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM service_accounts WHERE client_id = $1");
        let row = sqlx::query_as::<_, ServiceAccountRow>(&query)
            .bind(client_id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to query service account by client_id: {e}"
                )))
            })?;

        Ok(row.map(Self::to_entity))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceAccount>, CoreError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM service_accounts WHERE id = $1");
        let row = sqlx::query_as::<_, ServiceAccountRow>(&query)
            .bind(id)
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to query service account by id: {e}"
                )))
            })?;

        Ok(row.map(Self::to_entity))
    }

    /// Idempotent on `client_id` via an upsert, mirroring `UserRepositorySql::create`.
    async fn create(&self, account: ServiceAccount) -> Result<ServiceAccount, CoreError> {
        let query = format!(
            r#"
            INSERT INTO service_accounts (id, client_id, secret_hash, disabled, creator_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            ON CONFLICT (client_id) DO UPDATE SET client_id = EXCLUDED.client_id
            RETURNING {SELECT_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, ServiceAccountRow>(&query)
            .bind(account.id())
            .bind(account.client_id())
            .bind(account.secret_hash().as_hash_str())
            .bind(account.is_disabled())
            .bind(account.creator_id())
            .fetch_one(self.db.pool())
            .await
            .map_err(|e| {
                PersistenceError::Execution(ExecutionError::query_failed(format!(
                    "failed to create service account: {e}"
                )))
            })?;

        Ok(Self::to_entity(row))
    }

    async fn set_disabled(&self, id: Uuid, disabled: bool) -> Result<(), CoreError> {
        let result = sqlx::query(
            "UPDATE service_accounts SET disabled = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(disabled)
        .bind(id)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            PersistenceError::Execution(ExecutionError::query_failed(format!(
                "failed to set service account disabled flag: {e}"
            )))
        })?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found("ServiceAccount", id.to_string()));
        }

        Ok(())
    }

    async fn rotate_secret(&self, id: Uuid, new_secret_hash: StoredCredential) -> Result<(), CoreError> {
        let result = sqlx::query(
            "UPDATE service_accounts SET secret_hash = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(new_secret_hash.as_hash_str())
        .bind(id)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            PersistenceError::Execution(ExecutionError::query_failed(format!(
                "failed to rotate service account secret: {e}"
            )))
        })?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found("ServiceAccount", id.to_string()));
        }

        Ok(())
    }
}
