// Entity vocabulary for the IAM domain: the shapes the repositories persist
// and the facade's admin operations mutate. Core treats all hashed material
// (session tokens, service-account secrets) as opaque — see
// `StoredCredential` in `core::credentials`.

pub mod user;
pub mod service_account;
pub mod session;
pub mod role;
pub mod role_assignment;
pub mod revoked_token_id;

pub use user::User;
pub use service_account::ServiceAccount;
pub use session::Session;
pub use role::Role;
pub use role_assignment::{GroupRoleAssignment, UserRoleAssignment};
pub use revoked_token_id::RevokedTokenId;

use uuid::Uuid;

/// Creator identifier recorded on entities provisioned just-in-time from an
/// external identity provider rather than by an administrator.
pub const SYSTEM_UUID: Uuid = Uuid::nil();

#[cfg(test)]
mod tests;
