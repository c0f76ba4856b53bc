use std::sync::Arc;

use crate::core::error::{AuthenticationError, CoreError};
use crate::core::identity::{Principal, PrincipalKind};
use crate::core::roles::RoleResolver;
use crate::core::usecases::ports::{Clock, SessionRepository, TokenHasher, UserRepository};

use super::{AuthOutcome, Authenticator, AuthenticatorKind, RequestCredentials};

/// Validates the session cookie named `cookie_name` against `SessionRepository`.
///
/// Per spec §4.2.1: the owning session's stored identity-provider token is
/// parsed best-effort for a `groups` claim — a missing or malformed claim
/// yields no groups, never a failure. The last-used timestamp bump is
/// fire-and-forget and never delays or fails the request it authenticates.
pub struct SessionCookieAuthenticator {
    cookie_name: String,
    sessions: Arc<dyn SessionRepository>,
    users: Arc<dyn UserRepository>,
    token_hasher: Arc<dyn TokenHasher>,
    role_resolver: Arc<RoleResolver>,
    clock: Arc<dyn Clock>,
}

impl SessionCookieAuthenticator {
    pub fn new(
        cookie_name: impl Into<String>,
        sessions: Arc<dyn SessionRepository>,
        users: Arc<dyn UserRepository>,
        token_hasher: Arc<dyn TokenHasher>,
        role_resolver: Arc<RoleResolver>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            sessions,
            users,
            token_hasher,
            role_resolver,
            clock,
        }
    }

    /// Extracts the `groups` claim from the session's stored
    /// identity-provider token, if any. Any absence or parse failure yields
    /// an empty list rather than propagating an error.
    fn groups_from_identity_provider_token(raw: Option<&str>) -> Vec<String> {
        let Some(raw) = raw else {
            return Vec::new();
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) else {
            return Vec::new();
        };
        value
            .get("groups")
            .and_then(|g| g.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl Authenticator for SessionCookieAuthenticator {
    async fn authenticate(&self, credentials: &RequestCredentials) -> Result<AuthOutcome, CoreError> {
        let Some(raw_cookie) = credentials.cookie(&self.cookie_name) else {
            return Ok(AuthOutcome::Declined);
        };

        let token_hash = self.token_hasher.hash_for_lookup(raw_cookie);
        let Some(session) = self.sessions.find_by_token_hash(&token_hash).await? else {
            return Ok(AuthOutcome::Failed(AuthenticationError::SessionNotFound));
        };

        if session.is_revoked() {
            return Ok(AuthOutcome::Failed(AuthenticationError::SessionRevoked));
        }
        let now = self.clock.now();
        if session.is_expired_at(now) {
            return Ok(AuthOutcome::Failed(AuthenticationError::SessionExpired));
        }

        let Some(user) = self.users.find_by_id(session.user_id()).await? else {
            return Ok(AuthOutcome::Failed(AuthenticationError::unknown_principal(
                session.user_id().to_string(),
            )));
        };
        if user.is_disabled() {
            return Ok(AuthOutcome::Failed(AuthenticationError::principal_disabled(
                user.subject(),
            )));
        }

        let groups = Self::groups_from_identity_provider_token(session.identity_provider_token());
        let roles = self.role_resolver.resolve(user.id(), &groups).await?;

        let sessions = Arc::clone(&self.sessions);
        let session_id = session.id();
        tokio::spawn(async move {
            let _ = sessions.touch(session_id, now).await;
        });

        let principal = Principal::new(
            user.subject(),
            PrincipalKind::User,
            user.id(),
            user.email().map(str::to_string),
            user.display_name().map(str::to_string),
            Some(session.id()),
            groups,
            roles,
        )?;

        Ok(AuthOutcome::Authenticated(principal))
    }

    fn kind(&self) -> AuthenticatorKind {
        AuthenticatorKind::SessionCookie
    }
}
