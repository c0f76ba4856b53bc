//! Port for service-account persistence.
//!
//! Abstracts service-account lookup, just-in-time provisioning, secret
//! rotation, and the disabled flag.
//!
//! Adapters must implement this trait to provide concrete storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::credentials::StoredCredential;
use crate::core::entities::ServiceAccount;
use crate::core::error::CoreError;

#[async_trait]
pub trait ServiceAccountRepository: Send + Sync {
	/// Find a service account by its client identifier (natural key).
	async fn find_by_client_id(&self, client_id: &str) -> Result<Option<ServiceAccount>, CoreError>;

	async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceAccount>, CoreError>;

	/// Create a service account row. Idempotent on `client_id`: a second
	/// call racing with the first must not create a duplicate row.
	async fn create(&self, account: ServiceAccount) -> Result<ServiceAccount, CoreError>;

	async fn set_disabled(&self, id: Uuid, disabled: bool) -> Result<(), CoreError>;

	/// Replace the stored secret hash, invalidating the previous secret
	/// immediately.
	async fn rotate_secret(&self, id: Uuid, new_secret_hash: StoredCredential) -> Result<(), CoreError>;
}
