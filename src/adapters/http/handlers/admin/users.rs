// Illustrative admin handlers for user provisioning. Not mounted on every
// route a full REST surface would need — see router::admin_routes.
use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::adapters::http::{
    dto::admin::{CreateUserRequest, CreateUserResponse},
    error::{HttpError, ValidationError},
    state::AppState,
};
use crate::core::entities::User;

pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), HttpError> {
    request.validate().map_err(|msg| HttpError::Validation(ValidationError::new(msg)))?;

    let mut user = User::new(Uuid::new_v4(), request.subject);
    if let Some(email) = request.email {
        user = user.with_email(email);
    }
    if let Some(display_name) = request.display_name {
        user = user.with_display_name(display_name);
    }

    let created = state.facade.create_user(user).await?;
    let response = CreateUserResponse {
        id: created.id().to_string(),
        subject: created.subject().to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}
