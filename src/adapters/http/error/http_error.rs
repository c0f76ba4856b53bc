// HTTP-specific error types for the IAM adapter.

/*
This module defines errors specific to the HTTP adapter layer.

These errors represent failures in HTTP request handling, validation, and projection,
independent of business logic. They are NOT domain errors.

Design Principles:
 - **Isolation**: HTTP errors never leak domain or persistence details upward
 - **Projection**: CoreError's eight kinds are mapped to a fixed HTTP status each
 - **No panic**: All HTTP operations return Results
 - **User-safe**: Error messages are safe to expose to clients

Errors are organized by concern:
 - `ValidationError`: Input validation / invalid-argument failures (400)
 - `UnauthenticatedError`: No valid credential presented (401)
 - `ForbiddenError`: Identified but not permitted (403)
 - `NotFoundError`: Resource not found (404)
 - `ConflictError`: Already-exists or precondition-failed (409)
 - `InternalError`: Storage-unavailable, cancelled, or unexpected errors (500)
 - `HttpError`: Top-level enum that wraps all of the above
*/

use std::fmt;

use crate::core::error::CoreError;

#[derive(Debug, Clone)]
pub enum HttpError {
    /// Malformed request body or invalid argument (400 Bad Request)
    Validation(ValidationError),
    /// No valid credential presented (401 Unauthorized)
    Unauthenticated(UnauthenticatedError),
    /// Identified but lacking permission (403 Forbidden)
    Forbidden(ForbiddenError),
    /// Resource not found (404 Not Found)
    NotFound(NotFoundError),
    /// Resource conflict or precondition failure (409 Conflict)
    Conflict(ConflictError),
    /// Unexpected server error (500 Internal Server Error)
    Internal(InternalError),
}

impl HttpError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            HttpError::Validation(_) => 400,
            HttpError::Unauthenticated(_) => 401,
            HttpError::Forbidden(_) => 403,
            HttpError::NotFound(_) => 404,
            HttpError::Conflict(_) => 409,
            HttpError::Internal(_) => 500,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, HttpError::Validation(_))
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, HttpError::Unauthenticated(_))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, HttpError::Forbidden(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, HttpError::NotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, HttpError::Conflict(_))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, HttpError::Internal(_))
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Validation(e) => write!(f, "validation error: {}", e),
            HttpError::Unauthenticated(e) => write!(f, "unauthenticated: {}", e),
            HttpError::Forbidden(e) => write!(f, "forbidden: {}", e),
            HttpError::NotFound(e) => write!(f, "not found: {}", e),
            HttpError::Conflict(e) => write!(f, "conflict: {}", e),
            HttpError::Internal(e) => write!(f, "internal error: {}", e),
        }
    }
}

impl std::error::Error for HttpError {}

impl axum::response::IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;

        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error_response = crate::adapters::http::error::error_response::ErrorResponse::from_http_error(&self);

        (status, Json(error_response)).into_response()
    }
}

/// Maps the eight-kind `CoreError` taxonomy onto the six HTTP error buckets
/// above, per the status table the admin cache-refresh endpoint's contract
/// specifies and the same mapping every other admin handler reuses.
impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Unauthenticated(_) => {
                HttpError::Unauthenticated(UnauthenticatedError::new("unauthenticated"))
            }
            CoreError::Unauthorized { object, action } => HttpError::Forbidden(ForbiddenError::new(format!(
                "not permitted: {action} on {object}"
            ))),
            CoreError::NotFound { entity, key } => {
                HttpError::NotFound(NotFoundError::with_resource_type(format!("{entity} not found: {key}"), entity))
            }
            CoreError::AlreadyExists { entity, key } => HttpError::Conflict(ConflictError::with_resource(
                format!("{entity} already exists: {key}"),
                entity,
            )),
            CoreError::PreconditionFailed { reason } => {
                HttpError::Conflict(ConflictError::new(reason))
            }
            CoreError::InvalidArgument { reason } => HttpError::Validation(ValidationError::new(reason)),
            CoreError::StorageUnavailable { reason } => {
                HttpError::Internal(InternalError::with_details("storage unavailable", reason))
            }
            CoreError::Cancelled => HttpError::Internal(InternalError::new("operation cancelled")),
        }
    }
}

// ============================================================================
// Specific Error Types
// ============================================================================

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
    pub field: Option<String>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: Some(field.into()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "{}: {}", field, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

#[derive(Debug, Clone)]
pub struct UnauthenticatedError {
    pub reason: String,
}

impl UnauthenticatedError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for UnauthenticatedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

#[derive(Debug, Clone)]
pub struct ForbiddenError {
    pub reason: String,
}

impl ForbiddenError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ForbiddenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

#[derive(Debug, Clone)]
pub struct ConflictError {
    pub message: String,
    pub resource: Option<String>,
}

impl ConflictError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            resource: None,
        }
    }

    pub fn with_resource(message: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            resource: Some(resource.into()),
        }
    }
}

impl fmt::Display for ConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(resource) = &self.resource {
            write!(f, "{}: {}", resource, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotFoundError {
    pub message: String,
    pub resource_type: Option<String>,
}

impl NotFoundError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            resource_type: None,
        }
    }

    pub fn with_resource_type(message: impl Into<String>, resource_type: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            resource_type: Some(resource_type.into()),
        }
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone)]
pub struct InternalError {
    pub message: String,
    pub details: Option<String>,
}

impl InternalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
