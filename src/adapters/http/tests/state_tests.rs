//! Tests for AppState

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;
use uuid::Uuid;

use crate::adapters::http::state::AppState;
use crate::core::authn::AuthenticatorChain;
use crate::core::cache::GroupRoleCache;
use crate::core::credentials::StoredCredential;
use crate::core::entities::{GroupRoleAssignment, RevokedTokenId, Role, ServiceAccount, Session, User, UserRoleAssignment};
use crate::core::error::CoreError;
use crate::core::iam::{IamFacade, IamFacadeDeps};
use crate::core::roles::RoleResolver;
use crate::core::usecases::ports::{
    Clock, PasswordHasher, PolicyEngine, RevokedTokenRepository, RoleAssignmentRepository, RoleRepository,
    SecretGenerator, ServiceAccountRepository, SessionRepository, TokenHasher, UserRepository,
};

struct NoopClock;
impl Clock for NoopClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        "2026-07-31T00:00:00Z".parse().unwrap()
    }
}

struct NoopSecretGenerator;
impl SecretGenerator for NoopSecretGenerator {
    fn generate(&self) -> String {
        "secret".to_string()
    }
}

struct NoopTokenHasher;
impl TokenHasher for NoopTokenHasher {
    fn hash_for_lookup(&self, raw: &str) -> String {
        raw.to_string()
    }
}

struct NoopPasswordHasher;
impl PasswordHasher for NoopPasswordHasher {
    fn hash(&self, raw: &str) -> StoredCredential {
        StoredCredential::from_hash(raw)
    }
    fn verify(&self, raw: &str, stored: &StoredCredential) -> bool {
        stored.as_hash_str() == raw
    }
}

#[derive(Default)]
struct EmptyUsers;
#[async_trait]
impl UserRepository for EmptyUsers {
    async fn find_by_subject(&self, _subject: &str) -> Result<Option<User>, CoreError> {
        Ok(None)
    }
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(None)
    }
    async fn create(&self, user: User) -> Result<User, CoreError> {
        Ok(user)
    }
    async fn set_disabled(&self, _id: Uuid, _disabled: bool) -> Result<(), CoreError> {
        Ok(())
    }
}

#[derive(Default)]
struct EmptySessions;
#[async_trait]
impl SessionRepository for EmptySessions {
    async fn create(&self, session: Session) -> Result<Session, CoreError> {
        Ok(session)
    }
    async fn find_by_token_hash(&self, _token_hash: &str) -> Result<Option<Session>, CoreError> {
        Ok(None)
    }
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Session>, CoreError> {
        Ok(None)
    }
    async fn list_for_user(&self, _user_id: Uuid) -> Result<Vec<Session>, CoreError> {
        Ok(Vec::new())
    }
    async fn revoke(&self, _id: Uuid) -> Result<(), CoreError> {
        Ok(())
    }
    async fn touch(&self, _id: Uuid, _at: chrono::DateTime<chrono::Utc>) -> Result<(), CoreError> {
        Ok(())
    }
}

#[derive(Default)]
struct EmptyServiceAccounts;
#[async_trait]
impl ServiceAccountRepository for EmptyServiceAccounts {
    async fn find_by_client_id(&self, _client_id: &str) -> Result<Option<ServiceAccount>, CoreError> {
        Ok(None)
    }
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<ServiceAccount>, CoreError> {
        Ok(None)
    }
    async fn create(&self, account: ServiceAccount) -> Result<ServiceAccount, CoreError> {
        Ok(account)
    }
    async fn set_disabled(&self, _id: Uuid, _disabled: bool) -> Result<(), CoreError> {
        Ok(())
    }
    async fn rotate_secret(&self, _id: Uuid, _new_secret_hash: StoredCredential) -> Result<(), CoreError> {
        Ok(())
    }
}

#[derive(Default)]
struct EmptyRoles(Mutex<Vec<Role>>);
#[async_trait]
impl RoleRepository for EmptyRoles {
    async fn find_by_name(&self, _name: &str) -> Result<Option<Role>, CoreError> {
        Ok(None)
    }
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Role>, CoreError> {
        Ok(None)
    }
    async fn list_all(&self) -> Result<Vec<Role>, CoreError> {
        Ok(self.0.lock().unwrap().clone())
    }
    async fn create(&self, role: Role) -> Result<Role, CoreError> {
        Ok(role)
    }
    async fn update(&self, role: Role, _expected_version: i64) -> Result<Role, CoreError> {
        Ok(role)
    }
    async fn delete(&self, _id: Uuid) -> Result<(), CoreError> {
        Ok(())
    }
}

#[derive(Default)]
struct EmptyAssignments;
#[async_trait]
impl RoleAssignmentRepository for EmptyAssignments {
    async fn assign_user_role(&self, _assignment: UserRoleAssignment) -> Result<(), CoreError> {
        Ok(())
    }
    async fn remove_user_role(&self, _user_id: Uuid, _role_id: Uuid) -> Result<(), CoreError> {
        Ok(())
    }
    async fn list_user_roles(&self, _user_id: Uuid) -> Result<Vec<UserRoleAssignment>, CoreError> {
        Ok(Vec::new())
    }
    async fn assign_group_role(&self, _assignment: GroupRoleAssignment) -> Result<(), CoreError> {
        Ok(())
    }
    async fn remove_group_role(&self, _group_name: &str, _role_id: Uuid) -> Result<(), CoreError> {
        Ok(())
    }
    async fn list_all_group_roles(&self) -> Result<Vec<GroupRoleAssignment>, CoreError> {
        Ok(Vec::new())
    }
    async fn role_is_referenced(&self, _role_id: Uuid) -> Result<bool, CoreError> {
        Ok(false)
    }
}

#[derive(Default)]
struct EmptyRevokedTokens;
#[async_trait]
impl RevokedTokenRepository for EmptyRevokedTokens {
    async fn is_revoked(&self, _token_id: &str) -> Result<bool, CoreError> {
        Ok(false)
    }
    async fn revoke(&self, _revoked: RevokedTokenId) -> Result<(), CoreError> {
        Ok(())
    }
}

#[derive(Default)]
struct EmptyPolicyEngine;
#[async_trait]
impl PolicyEngine for EmptyPolicyEngine {
    async fn enforce(&self, _subject: &str, _object: &str, _action: &str, _labels: &[(String, String)]) -> Result<bool, CoreError> {
        Ok(false)
    }
    async fn sync_role_policy(
        &self,
        _role_subject: &str,
        _object: &str,
        _action: &str,
        _scope_predicate: Option<&str>,
    ) -> Result<(), CoreError> {
        Ok(())
    }
    async fn remove_role_policies(&self, _role_subject: &str) -> Result<(), CoreError> {
        Ok(())
    }
}

async fn build_state() -> AppState {
    let clock: Arc<dyn Clock> = Arc::new(NoopClock);
    let roles: Arc<dyn RoleRepository> = Arc::new(EmptyRoles::default());
    let assignments: Arc<dyn RoleAssignmentRepository> = Arc::new(EmptyAssignments);
    let cache = Arc::new(GroupRoleCache::new(assignments.clone(), roles.clone(), clock.clone()));
    let role_resolver = Arc::new(RoleResolver::new(assignments.clone(), roles.clone(), cache.clone()));

    let deps = IamFacadeDeps {
        authenticators: Arc::new(AuthenticatorChain::new(Vec::new())),
        policy_engine: Arc::new(EmptyPolicyEngine),
        cache,
        role_resolver,
        users: Arc::new(EmptyUsers),
        service_accounts: Arc::new(EmptyServiceAccounts),
        sessions: Arc::new(EmptySessions),
        roles,
        role_assignments: assignments,
        revoked_tokens: Arc::new(EmptyRevokedTokens),
        secret_generator: Arc::new(NoopSecretGenerator),
        password_hasher: Arc::new(NoopPasswordHasher),
        token_hasher: Arc::new(NoopTokenHasher),
        clock,
    };

    let facade = IamFacade::start(deps, Duration::hours(1), Duration::minutes(5))
        .await
        .expect("facade startup should succeed against an empty cache");
    AppState::new(facade)
}

#[tokio::test]
async fn app_state_wraps_the_facade() {
    let state = build_state().await;
    let outcome = state
        .facade
        .refresh_group_role_cache()
        .await
        .expect("refresh should succeed");
    assert_eq!(outcome.groups, 0);
}

#[tokio::test]
async fn app_state_clones_share_the_same_facade() {
    let state = build_state().await;
    let cloned = state.clone();
    assert!(Arc::ptr_eq(&state.facade, &cloned.facade));
}
