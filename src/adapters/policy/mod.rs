//! Static policy engine adapter.

pub mod casbin_policy;

pub use casbin_policy::CasbinPolicyEngine;
