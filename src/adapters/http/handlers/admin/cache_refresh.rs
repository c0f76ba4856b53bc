// POST /admin/cache/refresh — the one fully wired admin endpoint.
use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::adapters::http::{dto::public::CacheRefreshResponse, error::HttpError, state::AppState};
use crate::core::identity::Principal;

/// Forces an immediate group→role cache refresh.
///
/// # Returns
/// - 200 OK with `{status, version, groups, timestamp}`
/// - 401 Unauthorized if the request carries no recognized credentials
/// - 403 Forbidden if the principal is not permitted `admin:cache-refresh`
/// - 500 Internal Server Error on storage failure
pub async fn refresh_cache(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<(StatusCode, Json<CacheRefreshResponse>), HttpError> {
    let allowed = state.facade.authorize(&principal, "admin", "admin:cache-refresh", &[]).await?;
    if !allowed {
        return Err(HttpError::from(crate::core::error::CoreError::unauthorized(
            "admin",
            "admin:cache-refresh",
        )));
    }

    let outcome = state.facade.refresh_group_role_cache().await?;
    let response = CacheRefreshResponse::success(outcome.version, outcome.groups, chrono::Utc::now());
    Ok((StatusCode::OK, Json(response)))
}
