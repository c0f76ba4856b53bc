use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::cache::GroupRoleCache;
use crate::core::credentials::StoredCredential;
use crate::core::entities::{GroupRoleAssignment, Role, ServiceAccount, Session, User, UserRoleAssignment};
use crate::core::error::{CoreError, TokenError};
use crate::core::roles::RoleResolver;
use crate::core::token::TokenClaims;
use crate::core::usecases::ports::{
    Clock, RevokedTokenRepository, RoleAssignmentRepository, RoleRepository, ServiceAccountRepository,
    SessionRepository, TokenHasher, TokenVerifier, UserRepository,
};

pub(super) struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Deterministic, non-cryptographic stand-in: prefixes the raw value so
/// tests can assert on lookup behavior without pulling in a real digest.
pub(super) struct TestTokenHasher;

impl TokenHasher for TestTokenHasher {
    fn hash_for_lookup(&self, raw: &str) -> String {
        format!("hash:{raw}")
    }
}

pub(super) struct InMemorySessions {
    sessions: Mutex<Vec<Session>>,
    pub(super) touched: Mutex<Vec<(Uuid, DateTime<Utc>)>>,
}

impl InMemorySessions {
    pub(super) fn new(sessions: Vec<Session>) -> Self {
        Self {
            sessions: Mutex::new(sessions),
            touched: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessions {
    async fn create(&self, session: Session) -> Result<Session, CoreError> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session)
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<Session>, CoreError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.token_hash().as_hash_str() == token_hash)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>, CoreError> {
        Ok(self.sessions.lock().unwrap().iter().find(|s| s.id() == id).cloned())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Session>, CoreError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn revoke(&self, _id: Uuid) -> Result<(), CoreError> {
        Ok(())
    }

    async fn touch(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), CoreError> {
        self.touched.lock().unwrap().push((id, at));
        Ok(())
    }
}

pub(super) struct InMemoryUsers(pub(super) Mutex<Vec<User>>);

impl InMemoryUsers {
    pub(super) fn new(users: Vec<User>) -> Self {
        Self(Mutex::new(users))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, CoreError> {
        Ok(self.0.lock().unwrap().iter().find(|u| u.subject() == subject).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        Ok(self.0.lock().unwrap().iter().find(|u| u.id() == id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, CoreError> {
        let mut users = self.0.lock().unwrap();
        if let Some(existing) = users.iter().find(|u| u.subject() == user.subject()) {
            return Ok(existing.clone());
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn set_disabled(&self, _id: Uuid, _disabled: bool) -> Result<(), CoreError> {
        Ok(())
    }
}

pub(super) struct InMemoryServiceAccounts(pub(super) Mutex<Vec<ServiceAccount>>);

impl InMemoryServiceAccounts {
    pub(super) fn new(accounts: Vec<ServiceAccount>) -> Self {
        Self(Mutex::new(accounts))
    }
}

#[async_trait]
impl ServiceAccountRepository for InMemoryServiceAccounts {
    async fn find_by_client_id(&self, client_id: &str) -> Result<Option<ServiceAccount>, CoreError> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.client_id() == client_id)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceAccount>, CoreError> {
        Ok(self.0.lock().unwrap().iter().find(|a| a.id() == id).cloned())
    }

    async fn create(&self, account: ServiceAccount) -> Result<ServiceAccount, CoreError> {
        let mut accounts = self.0.lock().unwrap();
        if let Some(existing) = accounts.iter().find(|a| a.client_id() == account.client_id()) {
            return Ok(existing.clone());
        }
        accounts.push(account.clone());
        Ok(account)
    }

    async fn set_disabled(&self, _id: Uuid, _disabled: bool) -> Result<(), CoreError> {
        Ok(())
    }

    async fn rotate_secret(&self, _id: Uuid, _new_secret_hash: StoredCredential) -> Result<(), CoreError> {
        Ok(())
    }
}

pub(super) struct FakeRevokedTokens(pub(super) Vec<String>);

#[async_trait]
impl RevokedTokenRepository for FakeRevokedTokens {
    async fn is_revoked(&self, token_id: &str) -> Result<bool, CoreError> {
        Ok(self.0.iter().any(|id| id == token_id))
    }

    async fn revoke(&self, _revoked: crate::core::entities::RevokedTokenId) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Returns whichever fixed result was registered under the presented token,
/// or a malformed-token error if none was.
pub(super) struct FakeVerifier(pub(super) HashMap<String, Result<TokenClaims, TokenError>>);

impl TokenVerifier for FakeVerifier {
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.0
            .get(token)
            .cloned()
            .unwrap_or_else(|| Err(TokenError::malformed("no matching fixture")))
    }
}

pub(super) struct FakeRoles(pub(super) Vec<Role>);

#[async_trait]
impl RoleRepository for FakeRoles {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, CoreError> {
        Ok(self.0.iter().find(|r| r.name() == name).cloned())
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, CoreError> {
        Ok(self.0.iter().find(|r| r.id() == id).cloned())
    }
    async fn list_all(&self) -> Result<Vec<Role>, CoreError> {
        Ok(self.0.clone())
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

pub(super) struct FakeAssignments(pub(super) Vec<GroupRoleAssignment>, pub(super) Vec<UserRoleAssignment>);

#[async_trait]
impl RoleAssignmentRepository for FakeAssignments {
    async fn assign_user_role(&self, _assignment: UserRoleAssignment) -> Result<(), CoreError> {
        Ok(())
    }
    async fn remove_user_role(&self, _user_id: Uuid, _role_id: Uuid) -> Result<(), CoreError> {
        Ok(())
    }
    async fn list_user_roles(&self, user_id: Uuid) -> Result<Vec<UserRoleAssignment>, CoreError> {
        Ok(self.1.iter().filter(|a| a.user_id() == user_id).cloned().collect())
    }
    async fn assign_group_role(&self, _assignment: GroupRoleAssignment) -> Result<(), CoreError> {
        Ok(())
    }
    async fn remove_group_role(&self, _group_name: &str, _role_id: Uuid) -> Result<(), CoreError> {
        Ok(())
    }
    async fn list_all_group_roles(&self) -> Result<Vec<GroupRoleAssignment>, CoreError> {
        Ok(self.0.clone())
    }
    async fn role_is_referenced(&self, _role_id: Uuid) -> Result<bool, CoreError> {
        Ok(false)
    }
}

/// Builds a `RoleResolver` backed by an already-refreshed cache, so tests
/// don't need to reason about refresh timing.
pub(super) async fn build_role_resolver(
    roles: Vec<Role>,
    group_assignments: Vec<GroupRoleAssignment>,
    user_assignments: Vec<UserRoleAssignment>,
) -> Arc<RoleResolver> {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock("2026-07-31T00:00:00Z".parse().unwrap()));
    let roles_repo: Arc<dyn RoleRepository> = Arc::new(FakeRoles(roles));
    let assignments_repo: Arc<dyn RoleAssignmentRepository> =
        Arc::new(FakeAssignments(group_assignments, user_assignments));

    let cache = Arc::new(GroupRoleCache::new(
        Arc::clone(&assignments_repo),
        Arc::clone(&roles_repo),
        clock,
    ));
    cache.refresh().await.unwrap();

    Arc::new(RoleResolver::new(assignments_repo, roles_repo, cache))
}
