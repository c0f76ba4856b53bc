//! The immutable group→role snapshot cache: the core's lock-free read path.

pub mod group_role_cache;
pub mod group_role_snapshot;

pub use group_role_cache::GroupRoleCache;
pub use group_role_snapshot::GroupRoleSnapshot;

#[cfg(test)]
mod tests;
