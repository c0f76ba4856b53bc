//! Port for the static policy engine the evaluator consults read-only.
//!
//! Abstracts Casbin (or any engine satisfying the same contract) so the
//! policy evaluator never depends on a concrete enforcer type. Request-path
//! code must call only `enforce`; the `sync_*` methods exist solely for
//! admin operations that bind or unbind a role's policy rows.
//!
//! Adapters must implement this trait to provide a concrete engine.

use async_trait::async_trait;

use crate::core::error::CoreError;

#[async_trait]
pub trait PolicyEngine: Send + Sync {
	/// Evaluate whether `subject` (a role-qualified subject such as
	/// `role:product-engineer`) may perform `action` on `object` under the
	/// given attribute labels. Never mutates engine state.
	async fn enforce(
		&self,
		subject: &str,
		object: &str,
		action: &str,
		labels: &[(String, String)],
	) -> Result<bool, CoreError>;

	/// Bind a role's permitted action to its policy subject, gated by
	/// `scope_predicate` (the role's own predicate string, e.g. `env=="dev"`,
	/// or `None` for an unscoped grant). Called only from admin operations
	/// (`create-role`, `update-role`).
	async fn sync_role_policy(
		&self,
		role_subject: &str,
		object: &str,
		action: &str,
		scope_predicate: Option<&str>,
	) -> Result<(), CoreError>;

	/// Remove every policy row bound to `role_subject`. Called only from
	/// `delete-role`, atomically with the row delete.
	async fn remove_role_policies(&self, role_subject: &str) -> Result<(), CoreError>;
}
