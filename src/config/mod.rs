//! Process configuration: read once from the environment at startup,
//! consulted nowhere else. `main` is the only caller.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::authn::AuthenticatorKind;

fn default_session_cookie_name() -> String {
    "grid_session".to_string()
}

fn default_cache_refresh_interval_secs() -> u64 {
    300
}

fn default_session_expiration_secs() -> u64 {
    3600
}

fn default_authenticator_order() -> String {
    "session-cookie,bearer-token".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

/// Mirrors the process environment field-for-field; `Config` is the
/// validated, typed form the rest of the binary consumes.
#[derive(Debug, Deserialize)]
struct RawConfig {
    database_url: String,
    hmac_secret: String,
    bearer_issuer: String,
    bearer_audience: String,
    #[serde(default = "default_session_cookie_name")]
    session_cookie_name: String,
    #[serde(default = "default_cache_refresh_interval_secs")]
    cache_refresh_interval: u64,
    #[serde(default = "default_session_expiration_secs")]
    session_expiration: u64,
    #[serde(default = "default_authenticator_order")]
    authenticator_order: String,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_bind_address")]
    bind_address: String,
}

/// Validated process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub hmac_secret: String,
    pub bearer_issuer: String,
    pub bearer_audience: String,
    pub session_cookie_name: String,
    pub cache_refresh_interval: Duration,
    pub session_expiration: Duration,
    pub authenticator_order: Vec<AuthenticatorKind>,
    pub log_level: String,
    pub bind_address: String,
}

impl Config {
    /// Loads a local `.env` file if present (never overriding a variable
    /// already set in the process environment), then reads the full
    /// configuration from the environment via `envy`.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let raw: RawConfig = envy::from_env()
            .context("failed to read configuration from the environment")?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        Ok(Self {
            database_url: raw.database_url,
            hmac_secret: raw.hmac_secret,
            bearer_issuer: raw.bearer_issuer,
            bearer_audience: raw.bearer_audience,
            session_cookie_name: raw.session_cookie_name,
            cache_refresh_interval: Duration::from_secs(raw.cache_refresh_interval),
            session_expiration: Duration::from_secs(raw.session_expiration),
            authenticator_order: parse_authenticator_order(&raw.authenticator_order)?,
            log_level: raw.log_level,
            bind_address: raw.bind_address,
        })
    }
}

fn parse_authenticator_order(raw: &str) -> Result<Vec<AuthenticatorKind>> {
    let order: Result<Vec<AuthenticatorKind>> = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token {
            "session-cookie" => Ok(AuthenticatorKind::SessionCookie),
            "bearer-token" => Ok(AuthenticatorKind::BearerToken),
            other => bail!("unrecognized authenticator kind in authenticator-order: {other}"),
        })
        .collect();

    let order = order?;
    if order.is_empty() {
        bail!("authenticator-order must name at least one authenticator");
    }
    Ok(order)
}

#[cfg(test)]
mod tests;
