//! The IAM service facade: the single capability surface transport code
//! consumes. See `IamFacade` for the authentication, authorization, and
//! admin-write operations it exposes, and `Lifecycle` for its startup and
//! shutdown states.

pub mod admin_operations;
pub mod iam_facade;
pub mod iam_facade_deps;
pub mod lifecycle;

pub use admin_operations::{CacheRefreshOutcome, CreateSessionOutcome, RotateSecretOutcome};
pub use iam_facade::IamFacade;
pub use iam_facade_deps::IamFacadeDeps;
pub use lifecycle::Lifecycle;

#[cfg(test)]
mod tests;
