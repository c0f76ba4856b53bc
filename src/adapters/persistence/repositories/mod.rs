// SQL-backed repository implementations.

/*
Repositories implement the port interfaces defined in `core::usecases::ports`.

Each repository:
 - Uses the database connection pool
 - Maps database rows to domain entities
 - Translates database errors to persistence errors, which convert to
   `CoreError::StorageUnavailable` at the port boundary
 - Does NOT contain business logic
*/

pub mod revoked_token_repository_sql;
pub mod role_assignment_repository_sql;
pub mod role_repository_sql;
pub mod service_account_repository_sql;
pub mod session_repository_sql;
pub mod user_repository_sql;

pub use revoked_token_repository_sql::RevokedTokenRepositorySql;
pub use role_assignment_repository_sql::RoleAssignmentRepositorySql;
pub use role_repository_sql::RoleRepositorySql;
pub use service_account_repository_sql::ServiceAccountRepositorySql;
pub use session_repository_sql::SessionRepositorySql;
pub use user_repository_sql::UserRepositorySql;

#[cfg(test)]
mod tests;
