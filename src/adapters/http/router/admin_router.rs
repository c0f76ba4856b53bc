// Admin routes: every route here sits behind the authentication middleware.
// `/cache/refresh` is the only fully-specified wire endpoint; the rest are
// mounted for completeness, not as an exhaustive REST surface.

use axum::{
    middleware as axum_middleware,
    routing::{post, put},
    Router,
};

use crate::adapters::http::{handlers, middleware, state::AppState};

pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/cache/refresh", post(handlers::refresh_cache))
        .route("/users", post(handlers::create_user))
        .route("/sessions", post(handlers::create_session))
        .route("/service-accounts", post(handlers::create_service_account))
        .route("/service-accounts/{id}/secret", put(handlers::rotate_secret))
        .route("/roles", post(handlers::create_role))
        .route("/role-assignments/user", post(handlers::assign_user_role))
        .route("/role-assignments/group", post(handlers::assign_group_role))
        .layer(axum_middleware::from_fn_with_state(state, middleware::authenticate))
}
