//! Port for role-assignment persistence.
//!
//! Abstracts both link tables the spec names: direct user→role assignments
//! (read per-request, never cached) and group→role assignments (the group
//! cache's refresh bulk-reads these).
//!
//! Adapters must implement this trait to provide concrete storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::entities::{GroupRoleAssignment, UserRoleAssignment};
use crate::core::error::CoreError;

#[async_trait]
pub trait RoleAssignmentRepository: Send + Sync {
	async fn assign_user_role(&self, assignment: UserRoleAssignment) -> Result<(), CoreError>;

	async fn remove_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<(), CoreError>;

	async fn list_user_roles(&self, user_id: Uuid) -> Result<Vec<UserRoleAssignment>, CoreError>;

	async fn assign_group_role(&self, assignment: GroupRoleAssignment) -> Result<(), CoreError>;

	async fn remove_group_role(&self, group_name: &str, role_id: Uuid) -> Result<(), CoreError>;

	/// The complete group→role assignment list, for the cache's refresh.
	async fn list_all_group_roles(&self) -> Result<Vec<GroupRoleAssignment>, CoreError>;

	/// True if any user or group assignment still references `role_id`,
	/// used by `delete-role`'s precondition check.
	async fn role_is_referenced(&self, role_id: Uuid) -> Result<bool, CoreError>;
}
