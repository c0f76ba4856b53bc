// HTTP adapter — Axum-based REST API layer for the IAM facade

// This module implements the HTTP transport layer for the IAM subsystem.
//
// It is responsible for:
//  - Accepting HTTP requests and resolving credentials to a Principal
//  - Delegating every operation to `IamFacade` — no repository or policy
//    engine is touched directly
//  - Mapping `CoreError` to HTTP status codes and structured JSON responses
//
// # Route Structure
//
// - `/admin/*`  - Authenticated admin write surface; `/admin/cache/refresh`
//   is the one fully-specified endpoint, the rest are illustrative
// - `/health/*` - Liveness and readiness probes (no auth required)
//
// # Architecture Layers
//
// - `dto`: HTTP Data Transfer Objects (request/response contracts)
// - `handlers`: HTTP request handlers (deserialization, validation, response)
// - `middleware`: Cross-cutting concerns (authentication)
// - `error`: HTTP error types and response projection
// - `state`: Shared application state
// - `router`: Route configuration and setup

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod error;
pub mod state;
pub mod router;

pub use dto::{
    AssignGroupRoleRequest, AssignUserRoleRequest, CacheRefreshResponse, CreateRoleRequest,
    CreateServiceAccountRequest, CreateServiceAccountResponse, CreateSessionRequest,
    CreateSessionResponse, CreateUserRequest, CreateUserResponse, RoleResponse, RotateSecretResponse,
};
pub use error::{
    ConflictError, ErrorResponse, ForbiddenError, HttpError, InternalError, NotFoundError,
    UnauthenticatedError, ValidationError,
};
pub use state::AppState;
pub use router::create_router;

#[cfg(test)]
pub mod tests;
