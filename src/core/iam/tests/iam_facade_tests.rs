use std::sync::Arc;

use chrono::Duration;
use uuid::Uuid;

use crate::core::authn::AuthenticatorChain;
use crate::core::entities::{GroupRoleAssignment, Role, User};
use crate::core::error::CoreError;
use crate::core::iam::{IamFacade, IamFacadeDeps, Lifecycle};
use crate::core::identity::{Principal, PrincipalKind};
use crate::core::usecases::ports::{
    Clock, PasswordHasher, PolicyEngine, RevokedTokenRepository, RoleAssignmentRepository, RoleRepository,
    SecretGenerator, ServiceAccountRepository, SessionRepository, TokenHasher, UserRepository,
};

use super::fakes::{build_fixtures, FixedClock, TestPasswordHasher, TestTokenHasher};

async fn build_facade() -> (Arc<IamFacade>, super::fakes::Fixtures) {
    let fixtures = build_fixtures();
    let deps = IamFacadeDeps {
        authenticators: Arc::new(AuthenticatorChain::new(vec![])),
        policy_engine: Arc::clone(&fixtures.policy_engine) as Arc<dyn PolicyEngine>,
        cache: Arc::clone(&fixtures.cache),
        role_resolver: Arc::clone(&fixtures.role_resolver),
        users: Arc::clone(&fixtures.users) as Arc<dyn UserRepository>,
        service_accounts: Arc::clone(&fixtures.service_accounts) as Arc<dyn ServiceAccountRepository>,
        sessions: Arc::clone(&fixtures.sessions) as Arc<dyn SessionRepository>,
        roles: Arc::clone(&fixtures.roles) as Arc<dyn RoleRepository>,
        role_assignments: Arc::clone(&fixtures.assignments) as Arc<dyn RoleAssignmentRepository>,
        revoked_tokens: Arc::new(super::fakes::FakeRevokedTokens) as Arc<dyn RevokedTokenRepository>,
        secret_generator: Arc::clone(&fixtures.secret_generator) as Arc<dyn SecretGenerator>,
        password_hasher: Arc::new(TestPasswordHasher) as Arc<dyn PasswordHasher>,
        token_hasher: Arc::new(TestTokenHasher) as Arc<dyn TokenHasher>,
        clock: Arc::new(FixedClock("2026-07-31T00:00:00Z".parse().unwrap())) as Arc<dyn Clock>,
    };
    let facade = IamFacade::start(deps, Duration::hours(2), Duration::hours(24)).await.unwrap();
    (facade, fixtures)
}

#[tokio::test]
async fn test_starts_in_serving_state() {
    let (facade, _) = build_facade().await;
    assert_eq!(facade.lifecycle(), Lifecycle::Serving);
}

#[tokio::test]
async fn test_shutdown_transitions_to_draining() {
    let (facade, _) = build_facade().await;
    facade.shutdown().await;
    assert_eq!(facade.lifecycle(), Lifecycle::Draining);
}

#[tokio::test]
async fn test_create_user_rejects_duplicate_subject() {
    let (facade, _) = build_facade().await;
    let user = User::new(Uuid::new_v4(), "alice@example.com");
    facade.create_user(user.clone()).await.unwrap();

    let dup = User::new(Uuid::new_v4(), "alice@example.com");
    let err = facade.create_user(dup).await.unwrap_err();
    assert!(matches!(err, CoreError::AlreadyExists { .. }));
}

#[tokio::test]
async fn test_create_session_returns_plaintext_once_and_persists_only_hash() {
    let (facade, fixtures) = build_facade().await;
    let user = facade.create_user(User::new(Uuid::new_v4(), "alice@example.com")).await.unwrap();

    let outcome = facade.create_session(user.id()).await.unwrap();
    assert!(!outcome.plaintext_token.is_empty());

    let stored = fixtures.sessions.0.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0].token_hash().as_hash_str(), outcome.plaintext_token);
}

#[tokio::test]
async fn test_rotate_service_account_secret_invalidates_old_hash() {
    let (facade, _) = build_facade().await;
    let (account, old_secret) = facade
        .create_service_account("svc-ingest".to_string(), Uuid::new_v4())
        .await
        .unwrap();

    let rotated = facade.rotate_service_account_secret(account.id()).await.unwrap();
    assert_ne!(rotated.plaintext_secret, old_secret);
    assert_ne!(rotated.service_account.secret_hash().as_hash_str(), account.secret_hash().as_hash_str());
}

#[tokio::test]
async fn test_assign_group_role_is_visible_on_next_resolve_s2_scenario() {
    let (facade, fixtures) = build_facade().await;
    let product_engineer = facade
        .create_role(Role::new(Uuid::new_v4(), "product-engineer", "desc"))
        .await
        .unwrap();
    facade
        .assign_group_role(GroupRoleAssignment::new(
            "product-engineers",
            product_engineer.id(),
            Uuid::new_v4(),
        ))
        .await
        .unwrap();

    let principal = Principal::new(
        "alice@example.com",
        PrincipalKind::User,
        Uuid::new_v4(),
        None,
        None,
        None,
        vec!["product-engineers".to_string()],
        Vec::<String>::new(),
    )
    .unwrap();
    let roles = facade.get_principal_roles(&principal).await.unwrap();
    assert!(roles.contains("product-engineer"));

    let platform_engineer = facade
        .create_role(Role::new(Uuid::new_v4(), "platform-engineer", "desc"))
        .await
        .unwrap();
    facade
        .assign_group_role(GroupRoleAssignment::new(
            "product-engineers",
            platform_engineer.id(),
            Uuid::new_v4(),
        ))
        .await
        .unwrap();

    let roles = facade.get_principal_roles(&principal).await.unwrap();
    assert_eq!(
        roles,
        std::collections::BTreeSet::from(["product-engineer".to_string(), "platform-engineer".to_string()])
    );
    assert_eq!(fixtures.cache.version(), 2);
}

#[tokio::test]
async fn test_create_role_syncs_policy_rows() {
    let (facade, fixtures) = build_facade().await;
    facade
        .create_role(
            Role::new(Uuid::new_v4(), "platform-engineer", "desc")
                .with_actions(vec!["state:apply".to_string()]),
        )
        .await
        .unwrap();

    let rows = fixtures.policy_engine.rows.lock().unwrap();
    assert_eq!(
        rows.as_slice(),
        [("role:platform-engineer".to_string(), "state".to_string(), "apply".to_string())]
    );
}

#[tokio::test]
async fn test_update_role_rejects_stale_version() {
    let (facade, _) = build_facade().await;
    let role = facade.create_role(Role::new(Uuid::new_v4(), "viewer", "desc")).await.unwrap();

    let err = facade.update_role(role.clone(), role.version() + 41).await.unwrap_err();
    assert!(matches!(err, CoreError::PreconditionFailed { .. }));
}

#[tokio::test]
async fn test_delete_role_refuses_when_referenced() {
    let (facade, fixtures) = build_facade().await;
    let role = facade.create_role(Role::new(Uuid::new_v4(), "viewer", "desc")).await.unwrap();
    *fixtures.assignments.referenced.lock().unwrap() = true;

    let err = facade.delete_role(role.id()).await.unwrap_err();
    assert!(matches!(err, CoreError::PreconditionFailed { .. }));
}

#[tokio::test]
async fn test_delete_role_removes_policy_rows_and_refreshes_cache() {
    let (facade, fixtures) = build_facade().await;
    let role = facade
        .create_role(Role::new(Uuid::new_v4(), "viewer", "desc").with_actions(vec!["state:read".to_string()]))
        .await
        .unwrap();
    let version_before = fixtures.cache.version();

    facade.delete_role(role.id()).await.unwrap();

    assert!(fixtures.policy_engine.rows.lock().unwrap().is_empty());
    assert!(fixtures.cache.version() > version_before);
}

#[tokio::test]
async fn test_authorize_delegates_to_evaluator() {
    let (facade, _) = build_facade().await;
    facade
        .create_role(
            Role::new(Uuid::new_v4(), "platform-engineer", "desc")
                .with_actions(vec!["state:apply".to_string()]),
        )
        .await
        .unwrap();

    let principal = Principal::new(
        "alice@example.com",
        PrincipalKind::User,
        Uuid::new_v4(),
        None,
        None,
        None,
        vec![],
        vec!["platform-engineer".to_string()],
    )
    .unwrap();

    assert!(facade.authorize(&principal, "state", "apply", &[]).await.unwrap());
    assert!(!facade.authorize(&principal, "state", "delete", &[]).await.unwrap());
}

#[tokio::test]
async fn test_refresh_group_role_cache_reports_version_and_group_count() {
    let (facade, _) = build_facade().await;
    let role = facade.create_role(Role::new(Uuid::new_v4(), "viewer", "desc")).await.unwrap();
    facade
        .assign_group_role(GroupRoleAssignment::new("everyone", role.id(), Uuid::new_v4()))
        .await
        .unwrap();

    let outcome = facade.refresh_group_role_cache().await.unwrap();
    assert_eq!(outcome.groups, 1);
    assert!(outcome.version >= 2);
}
