// Core identity vocabulary for the IAM domain.

pub mod principal;
pub mod principal_kind;

pub use principal::Principal;
pub use principal_kind::PrincipalKind;
