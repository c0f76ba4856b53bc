// Illustrative admin handlers for role definitions and assignments.
use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::adapters::http::{
    dto::admin::{AssignGroupRoleRequest, AssignUserRoleRequest, CreateRoleRequest, RoleResponse},
    error::{HttpError, ValidationError},
    state::AppState,
};
use crate::core::entities::{GroupRoleAssignment, Role, UserRoleAssignment, SYSTEM_UUID};

pub async fn create_role(
    State(state): State<AppState>,
    Json(request): Json<CreateRoleRequest>,
) -> Result<(StatusCode, Json<RoleResponse>), HttpError> {
    request.validate().map_err(|msg| HttpError::Validation(ValidationError::new(msg)))?;

    let mut role = Role::new(Uuid::new_v4(), request.name, request.description).with_actions(request.actions);
    if let Some(predicate) = request.scope_predicate {
        role = role.with_scope_predicate(predicate);
    }

    let created = state.facade.create_role(role).await?;
    Ok((StatusCode::CREATED, Json(to_role_response(&created))))
}

pub async fn assign_user_role(
    State(state): State<AppState>,
    Json(request): Json<AssignUserRoleRequest>,
) -> Result<StatusCode, HttpError> {
    request.validate().map_err(|msg| HttpError::Validation(ValidationError::new(msg)))?;
    let user_id: Uuid = request
        .user_id
        .parse()
        .map_err(|_| HttpError::Validation(ValidationError::with_field("not a valid uuid", "user_id")))?;
    let role_id: Uuid = request
        .role_id
        .parse()
        .map_err(|_| HttpError::Validation(ValidationError::with_field("not a valid uuid", "role_id")))?;

    state
        .facade
        .assign_user_role(UserRoleAssignment::new(user_id, role_id, SYSTEM_UUID))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn assign_group_role(
    State(state): State<AppState>,
    Json(request): Json<AssignGroupRoleRequest>,
) -> Result<StatusCode, HttpError> {
    request.validate().map_err(|msg| HttpError::Validation(ValidationError::new(msg)))?;
    let role_id: Uuid = request
        .role_id
        .parse()
        .map_err(|_| HttpError::Validation(ValidationError::with_field("not a valid uuid", "role_id")))?;

    state
        .facade
        .assign_group_role(GroupRoleAssignment::new(request.group_name, role_id, SYSTEM_UUID))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn to_role_response(role: &Role) -> RoleResponse {
    RoleResponse {
        id: role.id().to_string(),
        name: role.name().to_string(),
        description: role.description().to_string(),
        actions: role.actions().to_vec(),
        version: role.version(),
    }
}
