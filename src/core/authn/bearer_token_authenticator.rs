use std::sync::Arc;
use uuid::Uuid;

use crate::core::entities::{ServiceAccount, User, SYSTEM_UUID};
use crate::core::error::{AuthenticationError, CoreError};
use crate::core::identity::{Principal, PrincipalKind};
use crate::core::roles::RoleResolver;
use crate::core::usecases::ports::{RevokedTokenRepository, ServiceAccountRepository, TokenVerifier, UserRepository};

use super::{AuthOutcome, Authenticator, AuthenticatorKind, RequestCredentials};

const SERVICE_ACCOUNT_PREFIX: &str = "sa:";

/// Validates a `Bearer <token>` header via the injected `TokenVerifier`.
///
/// Per spec §4.2.2, a `sa:`-prefixed subject is resolved against an
/// existing service account (internal-identity-provider mode, never
/// provisioned here); any other subject is just-in-time provisioned on
/// first sight (external-identity-provider mode).
pub struct BearerTokenAuthenticator {
    verifier: Arc<dyn TokenVerifier>,
    revoked_tokens: Arc<dyn RevokedTokenRepository>,
    users: Arc<dyn UserRepository>,
    service_accounts: Arc<dyn ServiceAccountRepository>,
    role_resolver: Arc<RoleResolver>,
}

impl BearerTokenAuthenticator {
    pub fn new(
        verifier: Arc<dyn TokenVerifier>,
        revoked_tokens: Arc<dyn RevokedTokenRepository>,
        users: Arc<dyn UserRepository>,
        service_accounts: Arc<dyn ServiceAccountRepository>,
        role_resolver: Arc<RoleResolver>,
    ) -> Self {
        Self {
            verifier,
            revoked_tokens,
            users,
            service_accounts,
            role_resolver,
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for BearerTokenAuthenticator {
    async fn authenticate(&self, credentials: &RequestCredentials) -> Result<AuthOutcome, CoreError> {
        let Some(token) = credentials.bearer_token() else {
            return Ok(AuthOutcome::Declined);
        };

        let claims = match self.verifier.verify(token) {
            Ok(claims) => claims,
            Err(err) => return Ok(AuthOutcome::Failed(AuthenticationError::token_rejected(err))),
        };

        if self.revoked_tokens.is_revoked(&claims.token_id).await? {
            return Ok(AuthOutcome::Failed(AuthenticationError::TokenRevoked));
        }

        let groups = claims.normalized_groups();

        let principal = if let Some(client_id) = claims.subject.strip_prefix(SERVICE_ACCOUNT_PREFIX) {
            let Some(account) = self.service_accounts.find_by_client_id(client_id).await? else {
                return Ok(AuthOutcome::Failed(AuthenticationError::unknown_principal(
                    &claims.subject,
                )));
            };
            if account.is_disabled() {
                return Ok(AuthOutcome::Failed(AuthenticationError::principal_disabled(
                    account.client_id(),
                )));
            }
            self.build_service_account_principal(account, groups).await?
        } else if claims.is_service_account {
            let account = match self.service_accounts.find_by_client_id(&claims.subject).await? {
                Some(account) => account,
                None => {
                    let provisioned =
                        ServiceAccount::externally_managed(Uuid::new_v4(), &claims.subject, SYSTEM_UUID);
                    self.service_accounts.create(provisioned).await?
                }
            };
            if account.is_disabled() {
                return Ok(AuthOutcome::Failed(AuthenticationError::principal_disabled(
                    account.client_id(),
                )));
            }
            self.build_service_account_principal(account, groups).await?
        } else {
            let user = match self.users.find_by_subject(&claims.subject).await? {
                Some(user) => user,
                None => {
                    let provisioned = User::new(Uuid::new_v4(), &claims.subject);
                    self.users.create(provisioned).await?
                }
            };
            if user.is_disabled() {
                return Ok(AuthOutcome::Failed(AuthenticationError::principal_disabled(
                    user.subject(),
                )));
            }
            self.build_user_principal(user, groups).await?
        };

        Ok(AuthOutcome::Authenticated(principal))
    }

    fn kind(&self) -> AuthenticatorKind {
        AuthenticatorKind::BearerToken
    }
}

impl BearerTokenAuthenticator {
    async fn build_user_principal(&self, user: User, groups: Vec<String>) -> Result<Principal, CoreError> {
        let roles = self.role_resolver.resolve(user.id(), &groups).await?;
        Principal::new(
            user.subject(),
            PrincipalKind::User,
            user.id(),
            user.email().map(str::to_string),
            user.display_name().map(str::to_string),
            None,
            groups,
            roles,
        )
        .map_err(CoreError::from)
    }

    async fn build_service_account_principal(
        &self,
        account: ServiceAccount,
        groups: Vec<String>,
    ) -> Result<Principal, CoreError> {
        let roles = self.role_resolver.resolve(account.id(), &groups).await?;
        Principal::new(
            account.client_id(),
            PrincipalKind::ServiceAccount,
            account.id(),
            None,
            None,
            None,
            groups,
            roles,
        )
        .map_err(CoreError::from)
    }
}
