// Admin DTOs — typed request/response bodies for the IAM write surface.
//
// Only `/admin/cache/refresh` is wired into the router end to end (see
// `dto::public::cache_refresh`). These types exist so the handlers in
// `handlers::admin` have a stable, documented contract even where routing
// is illustrative rather than exhaustive.
pub mod users;
pub mod sessions;
pub mod service_accounts;
pub mod roles;

pub use users::{CreateUserRequest, CreateUserResponse};
pub use sessions::{CreateSessionRequest, CreateSessionResponse};
pub use service_accounts::{CreateServiceAccountRequest, CreateServiceAccountResponse, RotateSecretResponse};
pub use roles::{
    AssignGroupRoleRequest, AssignUserRoleRequest, CreateRoleRequest, RoleResponse,
};

#[cfg(test)]
pub mod tests;
