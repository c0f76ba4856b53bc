use std::sync::Arc;

use crate::core::cache::GroupRoleCache;
use crate::core::roles::RoleResolver;
use crate::core::usecases::ports::{
    Clock, PasswordHasher, PolicyEngine, RevokedTokenRepository, RoleAssignmentRepository, RoleRepository,
    SecretGenerator, ServiceAccountRepository, SessionRepository, TokenHasher, UserRepository,
};

use crate::core::authn::AuthenticatorChain;

/// Wiring for `IamFacade::start`. A plain data holder — one per process,
/// assembled once at startup from the configured adapters.
#[derive(Clone)]
pub struct IamFacadeDeps {
    pub authenticators: Arc<AuthenticatorChain>,
    pub policy_engine: Arc<dyn PolicyEngine>,
    pub cache: Arc<GroupRoleCache>,
    pub role_resolver: Arc<RoleResolver>,
    pub users: Arc<dyn UserRepository>,
    pub service_accounts: Arc<dyn ServiceAccountRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub role_assignments: Arc<dyn RoleAssignmentRepository>,
    pub revoked_tokens: Arc<dyn RevokedTokenRepository>,
    pub secret_generator: Arc<dyn SecretGenerator>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_hasher: Arc<dyn TokenHasher>,
    pub clock: Arc<dyn Clock>,
}
