//! Port for session persistence.
//!
//! Abstracts session creation, lookup by token hash, revocation, and the
//! out-of-band last-used-timestamp update.
//!
//! Adapters must implement this trait to provide concrete storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::entities::Session;
use crate::core::error::CoreError;

#[async_trait]
pub trait SessionRepository: Send + Sync {
	async fn create(&self, session: Session) -> Result<Session, CoreError>;

	/// Look up a session by the hash of its presented token. Implementors
	/// receive the hash, never the plaintext.
	async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, CoreError>;

	async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, CoreError>;

	async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Session>, CoreError>;

	async fn revoke(&self, id: Uuid) -> Result<(), CoreError>;

	/// Fire-and-forget bookkeeping: update `last_used_at`. Best-effort; a
	/// failure here must never fail the request that triggered it.
	async fn touch(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), CoreError>;
}
