//! Port for user persistence.
//!
//! Abstracts user lookup, just-in-time provisioning, and the disabled flag
//! for the authenticator chain and the IAM facade's admin surface.
//!
//! Adapters must implement this trait to provide concrete storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::entities::User;
use crate::core::error::CoreError;

#[async_trait]
pub trait UserRepository: Send + Sync {
	/// Find a user by its stable subject (natural key).
	async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, CoreError>;

	/// Find a user by its internal identifier.
	async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError>;

	/// Create a user row. Idempotent on `subject`: a second call racing with
	/// the first must not create a duplicate row.
	async fn create(&self, user: User) -> Result<User, CoreError>;

	async fn set_disabled(&self, id: Uuid, disabled: bool) -> Result<(), CoreError>;
}
