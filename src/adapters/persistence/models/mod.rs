// Database row models — raw representations of persisted data.

/*
These models represent raw database rows before mapping to domain entities.

Important distinctions:
 - Models are NOT domain entities
 - Models use database column names and types directly
 - Models are only used internally in the persistence adapter
 - Mapping to domain entities happens in repository implementations

All row types must implement `sqlx::FromRow` for direct deserialization.
*/

pub mod revoked_token_row;
pub mod role_assignment_row;
pub mod role_row;
pub mod service_account_row;
pub mod session_row;
pub mod user_row;

pub use revoked_token_row::RevokedTokenRow;
pub use role_assignment_row::{GroupRoleAssignmentRow, UserRoleAssignmentRow};
pub use role_row::RoleRow;
pub use service_account_row::ServiceAccountRow;
pub use session_row::SessionRow;
pub use user_row::UserRow;
