use std::sync::Arc;

use anyhow::Context;
use chrono::Duration as ChronoDuration;
use grid_iam_core::adapters::clock::SystemClock;
use grid_iam_core::adapters::crypto::password::Argon2PasswordHasher;
use grid_iam_core::adapters::crypto::token::{HmacKey, HmacTokenVerifier, RandSecretGenerator, Sha256TokenHasher};
use grid_iam_core::adapters::http::{create_router, AppState};
use grid_iam_core::adapters::persistence::{
    Database, RevokedTokenRepositorySql, RoleAssignmentRepositorySql, RoleRepositorySql,
    ServiceAccountRepositorySql, SessionRepositorySql, UserRepositorySql,
};
use grid_iam_core::adapters::policy::CasbinPolicyEngine;
use grid_iam_core::config::Config;
use grid_iam_core::core::authn::{
    AuthenticatorChain, AuthenticatorKind, BearerTokenAuthenticator, SessionCookieAuthenticator,
};
use grid_iam_core::core::cache::GroupRoleCache;
use grid_iam_core::core::iam::{IamFacade, IamFacadeDeps};
use grid_iam_core::core::roles::RoleResolver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    grid_iam_core::telemetry::init(&config.log_level);

    let db = Database::new_default(&config.database_url)
        .await
        .context("failed to connect to the database")?;

    let clock: Arc<dyn grid_iam_core::core::usecases::ports::Clock> = Arc::new(SystemClock);
    let users = Arc::new(UserRepositorySql::new(db.clone()));
    let sessions = Arc::new(SessionRepositorySql::new(db.clone()));
    let service_accounts = Arc::new(ServiceAccountRepositorySql::new(db.clone()));
    let roles = Arc::new(RoleRepositorySql::new(db.clone()));
    let role_assignments = Arc::new(RoleAssignmentRepositorySql::new(db.clone()));
    let revoked_tokens = Arc::new(RevokedTokenRepositorySql::new(db.clone()));

    let secret_generator = Arc::new(RandSecretGenerator::default());
    let token_hasher = Arc::new(Sha256TokenHasher);
    let password_hasher = Arc::new(
        Argon2PasswordHasher::new(65536, 3, 4, 16).context("invalid password-hasher parameters")?,
    );

    let hmac_key = HmacKey::from_base64(&config.hmac_secret)
        .or_else(|_| HmacKey::from_bytes(config.hmac_secret.as_bytes()))
        .map_err(anyhow::Error::msg)
        .context("invalid hmac-secret")?;
    let token_verifier = Arc::new(HmacTokenVerifier::new(
        &hmac_key,
        config.bearer_issuer.clone(),
        config.bearer_audience.clone(),
    ));

    let policy_engine = Arc::new(
        CasbinPolicyEngine::new()
            .await
            .context("failed to build the policy engine")?,
    );

    let cache = Arc::new(GroupRoleCache::new(
        role_assignments.clone(),
        roles.clone(),
        clock.clone(),
    ));
    let role_resolver = Arc::new(RoleResolver::new(
        role_assignments.clone(),
        roles.clone(),
        cache.clone(),
    ));

    let authenticators = build_authenticator_chain(
        &config,
        token_verifier,
        revoked_tokens.clone(),
        users.clone(),
        service_accounts.clone(),
        sessions.clone(),
        token_hasher.clone(),
        role_resolver.clone(),
        clock.clone(),
    );

    let deps = IamFacadeDeps {
        authenticators: Arc::new(authenticators),
        policy_engine,
        cache,
        role_resolver,
        users,
        service_accounts,
        sessions,
        roles,
        role_assignments,
        revoked_tokens,
        secret_generator,
        password_hasher,
        token_hasher,
        clock,
    };

    let session_ttl = ChronoDuration::from_std(config.session_expiration)
        .context("session-expiration out of range")?;
    let refresh_interval = ChronoDuration::from_std(config.cache_refresh_interval)
        .context("cache-refresh-interval out of range")?;

    let facade = IamFacade::start(deps, session_ttl, refresh_interval)
        .await
        .map_err(|err| anyhow::anyhow!("failed to start the IAM facade: {err}"))?;

    let state = AppState::new(facade.clone());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address))?;

    tracing::info!(address = %config.bind_address, "grid IAM core listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(facade))
        .await
        .context("server error")?;

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn build_authenticator_chain(
    config: &Config,
    token_verifier: Arc<HmacTokenVerifier>,
    revoked_tokens: Arc<RevokedTokenRepositorySql>,
    users: Arc<UserRepositorySql>,
    service_accounts: Arc<ServiceAccountRepositorySql>,
    sessions: Arc<SessionRepositorySql>,
    token_hasher: Arc<Sha256TokenHasher>,
    role_resolver: Arc<RoleResolver>,
    clock: Arc<dyn grid_iam_core::core::usecases::ports::Clock>,
) -> AuthenticatorChain {
    let authenticators = config
        .authenticator_order
        .iter()
        .map(|kind| -> Arc<dyn grid_iam_core::core::authn::Authenticator> {
            match kind {
                AuthenticatorKind::BearerToken => Arc::new(BearerTokenAuthenticator::new(
                    token_verifier.clone(),
                    revoked_tokens.clone(),
                    users.clone(),
                    service_accounts.clone(),
                    role_resolver.clone(),
                )),
                AuthenticatorKind::SessionCookie => Arc::new(SessionCookieAuthenticator::new(
                    config.session_cookie_name.clone(),
                    sessions.clone(),
                    users.clone(),
                    token_hasher.clone(),
                    role_resolver.clone(),
                    clock.clone(),
                )),
            }
        })
        .collect();

    AuthenticatorChain::new(authenticators)
}

/// Waits for Ctrl-C or SIGTERM to start a graceful drain. SIGHUP triggers an
/// immediate, out-of-band cache refresh instead — an operator's other way to
/// reach the same effect as `POST /admin/cache/refresh` without a credential.
async fn shutdown_signal(facade: Arc<IamFacade>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    #[cfg(unix)]
    let hangup_refresh = async {
        let mut hangup = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::hangup())
            .expect("failed to install SIGHUP handler");
        loop {
            hangup.recv().await;
            tracing::info!("SIGHUP received, forcing an immediate group-role cache refresh");
            if let Err(err) = facade.refresh_group_role_cache().await {
                tracing::error!(error = %err, "SIGHUP-triggered cache refresh failed");
            }
        }
    };

    #[cfg(not(unix))]
    let hangup_refresh = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = hangup_refresh => {},
    }

    facade.shutdown().await;
}
