// Illustrative admin handler for session issuance.
use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::adapters::http::{
    dto::admin::{CreateSessionRequest, CreateSessionResponse},
    error::{HttpError, ValidationError},
    state::AppState,
};

pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), HttpError> {
    request.validate().map_err(|msg| HttpError::Validation(ValidationError::new(msg)))?;
    let user_id: Uuid = request
        .user_id
        .parse()
        .map_err(|_| HttpError::Validation(ValidationError::with_field("not a valid uuid", "user_id")))?;

    let outcome = state.facade.create_session(user_id).await?;
    let response = CreateSessionResponse {
        session_id: outcome.session.id().to_string(),
        token: outcome.plaintext_token,
        expires_at: outcome.session.expires_at(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}
