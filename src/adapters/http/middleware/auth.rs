// Authentication middleware: builds a RequestCredentials from the incoming
// request and resolves it to a Principal via the facade's authenticator
// chain.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::{
    error::{HttpError, UnauthenticatedError},
    state::AppState,
};
use crate::core::authn::RequestCredentials;

/// Authenticates the request and inserts the resulting `Principal` into its
/// extensions. Handlers downstream read it with `Extension<Principal>`.
///
/// Returns 401 if no authenticator in the chain recognizes the presented
/// credentials, or if the credentials it does recognize are invalid.
pub async fn authenticate(State(state): State<AppState>, mut request: Request, next: Next) -> Result<Response, Response> {
    let credentials = build_credentials(&request);

    let principal = state
        .facade
        .authenticate(&credentials)
        .await
        .map_err(|err| HttpError::from(err).into_response())?
        .ok_or_else(|| HttpError::Unauthenticated(UnauthenticatedError::new("no credentials recognized")).into_response())?;

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

pub(crate) fn build_credentials(request: &Request) -> RequestCredentials {
    let mut credentials = RequestCredentials::new();

    if let Some(header_value) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        credentials = credentials.with_authorization_header(header_value);
    }

    if let Some(cookie_header) = request.headers().get(header::COOKIE).and_then(|v| v.to_str().ok()) {
        for pair in cookie_header.split(';') {
            if let Some((name, value)) = pair.trim().split_once('=') {
                credentials = credentials.with_cookie(name.trim(), value.trim());
            }
        }
    }

    credentials
}
