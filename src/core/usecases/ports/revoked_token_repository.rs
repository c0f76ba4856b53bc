//! Port for the bearer-token revocation list.
//!
//! Abstracts revoked-token-id lookup and insertion for the bearer-token
//! authenticator.
//!
//! Adapters must implement this trait to provide concrete storage.

use async_trait::async_trait;

use crate::core::entities::RevokedTokenId;
use crate::core::error::CoreError;

#[async_trait]
pub trait RevokedTokenRepository: Send + Sync {
	/// True if `token_id` is present and not yet past its natural
	/// expiration.
	async fn is_revoked(&self, token_id: &str) -> Result<bool, CoreError>;

	async fn revoke(&self, revoked: RevokedTokenId) -> Result<(), CoreError>;
}
