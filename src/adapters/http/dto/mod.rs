// HTTP Data Transfer Objects (DTOs)

/*
This module defines all DTOs for HTTP requests and responses.

DTOs are organized by visibility:
 - `public`: the one fully wired wire endpoint (`/admin/cache/refresh`)
 - `admin`: typed request/response bodies for the rest of the admin write
   surface — routing for these is illustrative, not a full REST surface

Design Principles:
 - **Transport only**: DTOs are never used in business logic
 - **Validation**: DTOs validate structure but not business rules
 - **Serialization**: All DTOs are JSON-serializable via serde
 - **Immutable**: DTOs are data containers with no behavior
*/

pub mod admin;
pub mod public;

pub use admin::{
    AssignGroupRoleRequest, AssignUserRoleRequest, CreateRoleRequest, CreateServiceAccountRequest,
    CreateServiceAccountResponse, CreateSessionRequest, CreateSessionResponse, CreateUserRequest,
    CreateUserResponse, RoleResponse, RotateSecretResponse,
};
pub use public::CacheRefreshResponse;
