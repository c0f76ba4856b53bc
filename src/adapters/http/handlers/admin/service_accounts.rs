// Illustrative admin handlers for service-account provisioning and secret
// rotation.
use axum::{extract::State, extract::Path, http::StatusCode, Extension, Json};
use uuid::Uuid;

use crate::adapters::http::{
    dto::admin::{CreateServiceAccountRequest, CreateServiceAccountResponse, RotateSecretResponse},
    error::{HttpError, ValidationError},
    state::AppState,
};
use crate::core::identity::Principal;

pub async fn create_service_account(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateServiceAccountRequest>,
) -> Result<(StatusCode, Json<CreateServiceAccountResponse>), HttpError> {
    request.validate().map_err(|msg| HttpError::Validation(ValidationError::new(msg)))?;

    let (account, secret) = state
        .facade
        .create_service_account(request.client_id, principal.internal_id())
        .await?;
    let response = CreateServiceAccountResponse {
        id: account.id().to_string(),
        client_id: account.client_id().to_string(),
        secret,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn rotate_secret(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RotateSecretResponse>, HttpError> {
    let outcome = state.facade.rotate_service_account_secret(id).await?;
    Ok(Json(RotateSecretResponse {
        id: outcome.service_account.id().to_string(),
        secret: outcome.plaintext_secret,
    }))
}
