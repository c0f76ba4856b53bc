use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::credentials::StoredCredential;
use crate::core::entities::{Role, ServiceAccount, User};
use crate::core::error::{AuthenticationError, TokenError};
use crate::core::token::TokenClaims;
use crate::core::usecases::ports::{RevokedTokenRepository, TokenVerifier};

use super::fakes::{
    build_role_resolver, FakeRevokedTokens, FakeVerifier, InMemoryServiceAccounts, InMemoryUsers,
};
use crate::core::authn::{AuthOutcome, Authenticator, BearerTokenAuthenticator, RequestCredentials};

fn claims(subject: &str) -> TokenClaims {
    TokenClaims::new(
        subject,
        Uuid::new_v4().to_string(),
        "https://issuer.example.com",
        "grid",
        "2026-07-31T00:00:00Z",
        "2026-07-31T01:00:00Z",
    )
}

async fn build_authenticator(
    token_fixtures: Vec<(&str, Result<TokenClaims, TokenError>)>,
    revoked: Vec<String>,
    users: Vec<User>,
    service_accounts: Vec<ServiceAccount>,
    roles: Vec<Role>,
) -> (
    BearerTokenAuthenticator,
    Arc<InMemoryUsers>,
    Arc<InMemoryServiceAccounts>,
) {
    let verifier: Arc<dyn TokenVerifier> = Arc::new(FakeVerifier(
        token_fixtures
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<HashMap<_, _>>(),
    ));
    let revoked_tokens: Arc<dyn RevokedTokenRepository> = Arc::new(FakeRevokedTokens(revoked));
    let users = Arc::new(InMemoryUsers::new(users));
    let service_accounts = Arc::new(InMemoryServiceAccounts::new(service_accounts));
    let resolver = build_role_resolver(roles, vec![], vec![]).await;

    let authenticator = BearerTokenAuthenticator::new(
        verifier,
        revoked_tokens,
        users.clone(),
        service_accounts.clone(),
        resolver,
    );
    (authenticator, users, service_accounts)
}

#[tokio::test]
async fn test_declines_when_no_authorization_header() {
    let (authenticator, ..) = build_authenticator(vec![], vec![], vec![], vec![], vec![]).await;
    let credentials = RequestCredentials::new();
    let outcome = authenticator.authenticate(&credentials).await.unwrap();
    assert_eq!(outcome, AuthOutcome::Declined);
}

#[tokio::test]
async fn test_fails_when_token_structurally_invalid() {
    let (authenticator, ..) = build_authenticator(
        vec![("bad-token", Err(TokenError::malformed("not a jwt")))],
        vec![],
        vec![],
        vec![],
        vec![],
    ).await;
    let credentials = RequestCredentials::new().with_authorization_header("Bearer bad-token");
    let outcome = authenticator.authenticate(&credentials).await.unwrap();
    assert!(matches!(
        outcome,
        AuthOutcome::Failed(AuthenticationError::TokenRejected(_))
    ));
}

#[tokio::test]
async fn test_fails_when_token_id_is_revoked() {
    let token_claims = claims("alice@example.com");
    let token_id = token_claims.token_id.clone();
    let (authenticator, ..) = build_authenticator(
        vec![("tok", Ok(token_claims))],
        vec![token_id],
        vec![],
        vec![],
        vec![],
    ).await;
    let credentials = RequestCredentials::new().with_authorization_header("Bearer tok");
    let outcome = authenticator.authenticate(&credentials).await.unwrap();
    assert_eq!(outcome, AuthOutcome::Failed(AuthenticationError::TokenRevoked));
}

#[tokio::test]
async fn test_sa_prefixed_subject_resolves_existing_service_account_internal_mode() {
    let account = ServiceAccount::new(Uuid::new_v4(), "svc-ingest", StoredCredential::from_hash("argon2-hash"), Uuid::new_v4());
    let token_claims = claims("sa:svc-ingest");
    let (authenticator, ..) = build_authenticator(
        vec![("tok", Ok(token_claims))],
        vec![],
        vec![],
        vec![account],
        vec![],
    ).await;
    let credentials = RequestCredentials::new().with_authorization_header("Bearer tok");
    let outcome = authenticator.authenticate(&credentials).await.unwrap();
    let AuthOutcome::Authenticated(principal) = outcome else {
        panic!("expected Authenticated, got {outcome:?}");
    };
    assert_eq!(principal.principal_id(), "sa:svc-ingest");
    assert!(principal.is_service_account());
}

#[tokio::test]
async fn test_sa_prefixed_subject_unknown_account_fails() {
    let token_claims = claims("sa:ghost");
    let (authenticator, ..) = build_authenticator(vec![("tok", Ok(token_claims))], vec![], vec![], vec![], vec![]).await;
    let credentials = RequestCredentials::new().with_authorization_header("Bearer tok");
    let outcome = authenticator.authenticate(&credentials).await.unwrap();
    assert!(matches!(
        outcome,
        AuthOutcome::Failed(AuthenticationError::UnknownPrincipal { .. })
    ));
}

#[tokio::test]
async fn test_external_idp_mode_provisions_user_on_first_sight() {
    let token_claims = claims("alice@example.com").with_groups(vec!["/product-engineers".to_string()]);
    let role = Role::new(Uuid::new_v4(), "product-engineer", "desc");
    let (authenticator, users, _) = build_authenticator(
        vec![("tok", Ok(token_claims))],
        vec![],
        vec![],
        vec![],
        vec![role],
    ).await;
    let credentials = RequestCredentials::new().with_authorization_header("Bearer tok");
    let outcome = authenticator.authenticate(&credentials).await.unwrap();
    let AuthOutcome::Authenticated(principal) = outcome else {
        panic!("expected Authenticated, got {outcome:?}");
    };
    assert_eq!(principal.principal_id(), "user:alice@example.com");
    assert_eq!(principal.groups(), &["product-engineers".to_string()]);
    assert!(principal.has_role("product-engineer"));
    assert_eq!(users.0.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_external_idp_mode_provisions_service_account_on_client_credentials_grant() {
    let token_claims = claims("ci-pipeline").as_service_account(true);
    let (authenticator, _, service_accounts) =
        build_authenticator(vec![("tok", Ok(token_claims))], vec![], vec![], vec![], vec![]).await;
    let credentials = RequestCredentials::new().with_authorization_header("Bearer tok");
    let outcome = authenticator.authenticate(&credentials).await.unwrap();
    let AuthOutcome::Authenticated(principal) = outcome else {
        panic!("expected Authenticated, got {outcome:?}");
    };
    assert!(principal.is_service_account());
    let stored = service_accounts.0.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored[0].secret_hash().as_hash_str(),
        crate::core::entities::service_account::EXTERNAL_IDP_MANAGED
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_sight_service_accounts_never_duplicate() {
    let token_claims = claims("ci-pipeline").as_service_account(true);
    let (authenticator, _, service_accounts) =
        build_authenticator(vec![("tok", Ok(token_claims))], vec![], vec![], vec![], vec![]).await;
    let authenticator = Arc::new(authenticator);
    let credentials = Arc::new(RequestCredentials::new().with_authorization_header("Bearer tok"));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let authenticator = authenticator.clone();
        let credentials = credentials.clone();
        handles.push(tokio::spawn(async move {
            authenticator.authenticate(&credentials).await.unwrap()
        }));
    }

    for handle in handles {
        let outcome = handle.await.unwrap();
        assert!(matches!(outcome, AuthOutcome::Authenticated(_)));
    }

    assert_eq!(service_accounts.0.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_fails_when_provisioned_user_is_disabled() {
    let user = User::new(Uuid::new_v4(), "alice@example.com").disabled(true);
    let token_claims = claims("alice@example.com");
    let (authenticator, ..) = build_authenticator(
        vec![("tok", Ok(token_claims))],
        vec![],
        vec![user],
        vec![],
        vec![],
    ).await;
    let credentials = RequestCredentials::new().with_authorization_header("Bearer tok");
    let outcome = authenticator.authenticate(&credentials).await.unwrap();
    assert!(matches!(
        outcome,
        AuthOutcome::Failed(AuthenticationError::PrincipalDisabled { .. })
    ));
}
