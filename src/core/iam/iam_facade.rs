use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use chrono::Duration;
use tokio::sync::Mutex as AsyncMutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::core::authn::{AuthenticatorChain, RequestCredentials};
use crate::core::cache::GroupRoleCache;
use crate::core::credentials::StoredCredential;
use crate::core::entities::{
    GroupRoleAssignment, Role, ServiceAccount, Session, User, UserRoleAssignment,
};
use crate::core::error::CoreError;
use crate::core::identity::Principal;
use crate::core::policy::{role_subject, PolicyEvaluator};
use crate::core::roles::RoleResolver;
use crate::core::usecases::ports::{
    Clock, PasswordHasher, PolicyEngine, RevokedTokenRepository, RoleAssignmentRepository, RoleRepository,
    SecretGenerator, ServiceAccountRepository, SessionRepository, TokenHasher, UserRepository,
};

use super::admin_operations::{CacheRefreshOutcome, CreateSessionOutcome, RotateSecretOutcome};
use super::iam_facade_deps::IamFacadeDeps;
use super::lifecycle::Lifecycle;

/// The single capability surface transport middleware and request handlers
/// consume: authentication, authorization, and the admin write operations
/// that mutate the entity model.
///
/// Admin writes follow a fixed order — repository write, then policy sync,
/// then cache refresh where applicable — and only return once all three
/// steps that apply have completed, so a subsequent read always observes
/// the effect.
pub struct IamFacade {
    authenticators: Arc<AuthenticatorChain>,
    evaluator: PolicyEvaluator,
    policy_engine: Arc<dyn PolicyEngine>,
    cache: Arc<GroupRoleCache>,
    role_resolver: Arc<RoleResolver>,
    users: Arc<dyn UserRepository>,
    service_accounts: Arc<dyn ServiceAccountRepository>,
    sessions: Arc<dyn SessionRepository>,
    roles: Arc<dyn RoleRepository>,
    role_assignments: Arc<dyn RoleAssignmentRepository>,
    revoked_tokens: Arc<dyn RevokedTokenRepository>,
    secret_generator: Arc<dyn SecretGenerator>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_hasher: Arc<dyn TokenHasher>,
    clock: Arc<dyn Clock>,
    session_ttl: Duration,
    lifecycle: StdMutex<Lifecycle>,
    refresh_task: AsyncMutex<Option<JoinHandle<()>>>,
}

impl IamFacade {
    /// Constructs the facade and performs the cache's first, synchronous
    /// refresh. Per spec, a failure here fails startup outright — no
    /// request may be served without a snapshot.
    pub async fn start(deps: IamFacadeDeps, session_ttl: Duration, refresh_interval: Duration) -> Result<Arc<Self>, CoreError> {
        deps.cache.refresh().await?;

        let facade = Arc::new(Self {
            authenticators: deps.authenticators,
            evaluator: PolicyEvaluator::new(Arc::clone(&deps.policy_engine)),
            policy_engine: deps.policy_engine,
            cache: deps.cache,
            role_resolver: deps.role_resolver,
            users: deps.users,
            service_accounts: deps.service_accounts,
            sessions: deps.sessions,
            roles: deps.roles,
            role_assignments: deps.role_assignments,
            revoked_tokens: deps.revoked_tokens,
            secret_generator: deps.secret_generator,
            password_hasher: deps.password_hasher,
            token_hasher: deps.token_hasher,
            clock: deps.clock,
            session_ttl,
            lifecycle: StdMutex::new(Lifecycle::Serving),
            refresh_task: AsyncMutex::new(None),
        });

        let periodic_cache = Arc::clone(&facade.cache);
        let interval = refresh_interval
            .to_std()
            .unwrap_or(std::time::Duration::from_secs(300));
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await; // first tick fires immediately; the startup refresh already happened
            loop {
                ticker.tick().await;
                if let Err(err) = periodic_cache.refresh().await {
                    tracing::error!(error = %err, "periodic group-role cache refresh failed; serving last good snapshot");
                }
            }
        });
        *facade.refresh_task.lock().await = Some(handle);

        Ok(facade)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        *self.lifecycle.lock().unwrap()
    }

    /// Stops the periodic refresh task. Idempotent; safe to call once
    /// during shutdown.
    pub async fn shutdown(&self) {
        *self.lifecycle.lock().unwrap() = Lifecycle::Draining;
        if let Some(handle) = self.refresh_task.lock().await.take() {
            handle.abort();
        }
    }

    // --- Authentication & authorization -----------------------------------

    pub async fn authenticate(&self, credentials: &RequestCredentials) -> Result<Option<Principal>, CoreError> {
        self.authenticators.authenticate(credentials).await
    }

    pub async fn authorize(
        &self,
        principal: &Principal,
        object: &str,
        action: &str,
        labels: &[(String, String)],
    ) -> Result<bool, CoreError> {
        self.evaluator.authorize(principal, object, action, labels).await
    }

    // --- Admin: users --------------------------------------------------

    /// Explicit admin creation: unlike the authenticator's just-in-time
    /// provisioning, a taken subject is an error, not a no-op.
    pub async fn create_user(&self, user: User) -> Result<User, CoreError> {
        if self.users.find_by_subject(user.subject()).await?.is_some() {
            return Err(CoreError::already_exists("user", user.subject()));
        }
        self.users.create(user).await
    }

    pub async fn get_user(&self, id: Uuid) -> Result<User, CoreError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("user", id.to_string()))
    }

    pub async fn get_user_by_subject(&self, subject: &str) -> Result<User, CoreError> {
        self.users
            .find_by_subject(subject)
            .await?
            .ok_or_else(|| CoreError::not_found("user", subject))
    }

    pub async fn disable_user(&self, id: Uuid) -> Result<(), CoreError> {
        self.users.set_disabled(id, true).await
    }

    // --- Admin: sessions -------------------------------------------------

    /// Generates a random, 256-bit-or-larger token, persists only its
    /// hash, and returns the plaintext exactly once.
    pub async fn create_session(&self, user_id: Uuid) -> Result<CreateSessionOutcome, CoreError> {
        let plaintext_token = self.secret_generator.generate();
        let now = self.clock.now();
        let session = Session::new(
            Uuid::new_v4(),
            StoredCredential::from_hash(self.token_hasher.hash_for_lookup(&plaintext_token)),
            user_id,
            now,
            now + self.session_ttl,
        );
        let session = self.sessions.create(session).await?;
        Ok(CreateSessionOutcome {
            session,
            plaintext_token,
        })
    }

    pub async fn revoke_session(&self, id: Uuid) -> Result<(), CoreError> {
        self.sessions.revoke(id).await
    }

    pub async fn get_session(&self, id: Uuid) -> Result<Session, CoreError> {
        self.sessions
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("session", id.to_string()))
    }

    pub async fn list_user_sessions(&self, user_id: Uuid) -> Result<Vec<Session>, CoreError> {
        self.sessions.list_for_user(user_id).await
    }

    // --- Admin: service accounts ------------------------------------------

    /// Generates a random secret, stores only its Argon2id hash, and
    /// returns the plaintext exactly once.
    pub async fn create_service_account(&self, client_id: String, creator_id: Uuid) -> Result<(ServiceAccount, String), CoreError> {
        if self.service_accounts.find_by_client_id(&client_id).await?.is_some() {
            return Err(CoreError::already_exists("service_account", client_id));
        }
        let plaintext_secret = self.secret_generator.generate();
        let account = ServiceAccount::new(
            Uuid::new_v4(),
            client_id,
            self.password_hasher.hash(&plaintext_secret),
            creator_id,
        );
        let account = self.service_accounts.create(account).await?;
        Ok((account, plaintext_secret))
    }

    pub async fn revoke_service_account(&self, id: Uuid) -> Result<(), CoreError> {
        self.service_accounts.set_disabled(id, true).await
    }

    pub async fn rotate_service_account_secret(&self, id: Uuid) -> Result<RotateSecretOutcome, CoreError> {
        let service_account = self
            .service_accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("service_account", id.to_string()))?;
        let plaintext_secret = self.secret_generator.generate();
        let new_hash = self.password_hasher.hash(&plaintext_secret);
        self.service_accounts.rotate_secret(id, new_hash).await?;
        Ok(RotateSecretOutcome {
            service_account,
            plaintext_secret,
        })
    }

    pub async fn get_service_account(&self, id: Uuid) -> Result<ServiceAccount, CoreError> {
        self.service_accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("service_account", id.to_string()))
    }

    // --- Admin: role assignments ------------------------------------------

    pub async fn assign_user_role(&self, assignment: UserRoleAssignment) -> Result<(), CoreError> {
        self.role_assignments.assign_user_role(assignment).await
    }

    pub async fn remove_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<(), CoreError> {
        self.role_assignments.remove_user_role(user_id, role_id).await
    }

    /// Core race-correctness case: group assignments feed the cache, so the
    /// refresh must complete before this call returns.
    pub async fn assign_group_role(&self, assignment: GroupRoleAssignment) -> Result<(), CoreError> {
        self.role_assignments.assign_group_role(assignment).await?;
        self.cache.refresh().await?;
        Ok(())
    }

    pub async fn remove_group_role(&self, group_name: &str, role_id: Uuid) -> Result<(), CoreError> {
        self.role_assignments.remove_group_role(group_name, role_id).await?;
        self.cache.refresh().await?;
        Ok(())
    }

    // --- Admin: roles ------------------------------------------------------

    /// Writes the role row, then binds each of its `(object, action)` pairs
    /// to the role-qualified subject in the policy engine.
    pub async fn create_role(&self, role: Role) -> Result<Role, CoreError> {
        if self.roles.find_by_name(role.name()).await?.is_some() {
            return Err(CoreError::already_exists("role", role.name()));
        }
        let subject = role_subject(role.name());
        let scope_predicate = role.scope_predicate().map(str::to_string);
        let pairs: Vec<(String, String)> = role
            .permission_pairs()
            .into_iter()
            .map(|(o, a)| (o.to_string(), a.to_string()))
            .collect();
        let created = self.roles.create(role).await?;
        for (object, action) in pairs {
            self.policy_engine
                .sync_role_policy(&subject, &object, &action, scope_predicate.as_deref())
                .await?;
        }
        Ok(created)
    }

    /// Optimistic-concurrency update: `expected_version` must match the
    /// stored row or the call fails with {precondition-failed}. Re-syncs
    /// policy rows for the new permission set.
    pub async fn update_role(&self, role: Role, expected_version: i64) -> Result<Role, CoreError> {
        let subject = role_subject(role.name());
        let scope_predicate = role.scope_predicate().map(str::to_string);
        let pairs: Vec<(String, String)> = role
            .permission_pairs()
            .into_iter()
            .map(|(o, a)| (o.to_string(), a.to_string()))
            .collect();
        let updated = self.roles.update(role, expected_version).await?;
        self.policy_engine.remove_role_policies(&subject).await?;
        for (object, action) in pairs {
            self.policy_engine
                .sync_role_policy(&subject, &object, &action, scope_predicate.as_deref())
                .await?;
        }
        Ok(updated)
    }

    /// Refuses if any assignment still references the role. Removes policy
    /// bindings and the row, then refreshes the cache since a group
    /// assignment referencing this role may now dangle.
    pub async fn delete_role(&self, id: Uuid) -> Result<(), CoreError> {
        if self.role_assignments.role_is_referenced(id).await? {
            return Err(CoreError::precondition_failed(format!(
                "role {id} is still referenced by at least one assignment"
            )));
        }
        let role = self
            .roles
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("role", id.to_string()))?;
        let subject = role_subject(role.name());
        self.policy_engine.remove_role_policies(&subject).await?;
        self.roles.delete(id).await?;
        self.cache.refresh().await?;
        Ok(())
    }

    pub async fn list_all_roles(&self) -> Result<Vec<Role>, CoreError> {
        self.roles.list_all().await
    }

    pub async fn get_role(&self, id: Uuid) -> Result<Role, CoreError> {
        self.roles
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("role", id.to_string()))
    }

    pub async fn get_role_permissions(&self, id: Uuid) -> Result<Vec<String>, CoreError> {
        Ok(self.get_role(id).await?.actions().to_vec())
    }

    /// The effective role set for an already-authenticated principal,
    /// re-derived from its internal id and groups (not simply
    /// `principal.roles()`, so this reflects the *current* cache snapshot
    /// rather than the one in effect when the principal authenticated).
    pub async fn get_principal_roles(&self, principal: &Principal) -> Result<std::collections::BTreeSet<String>, CoreError> {
        self.role_resolver.resolve(principal.internal_id(), principal.groups()).await
    }

    // --- Admin: cache --------------------------------------------------

    /// Forces an immediate refresh. Idempotent; safe to call concurrently
    /// with the periodic task (the cache's internal refresh guard
    /// serializes them).
    pub async fn refresh_group_role_cache(&self) -> Result<CacheRefreshOutcome, CoreError> {
        let version = self.cache.refresh().await?;
        Ok(CacheRefreshOutcome {
            version,
            groups: self.cache.group_count(),
        })
    }
}
