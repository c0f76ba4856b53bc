//! Port for role persistence.
//!
//! Abstracts role CRUD including the optimistic-version check `update-role`
//! relies on.
//!
//! Adapters must implement this trait to provide concrete storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::entities::Role;
use crate::core::error::CoreError;

#[async_trait]
pub trait RoleRepository: Send + Sync {
	async fn find_by_name(&self, name: &str) -> Result<Option<Role>, CoreError>;

	async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, CoreError>;

	async fn list_all(&self) -> Result<Vec<Role>, CoreError>;

	async fn create(&self, role: Role) -> Result<Role, CoreError>;

	/// Persist `role`, but only if the stored row's version equals
	/// `expected_version`; otherwise {precondition-failed}.
	async fn update(&self, role: Role, expected_version: i64) -> Result<Role, CoreError>;

	/// Remove the row. Callers must have already verified no assignment
	/// references it — the repository itself does not re-check.
	async fn delete(&self, id: Uuid) -> Result<(), CoreError>;
}
