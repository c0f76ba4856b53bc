use std::collections::BTreeSet;
use std::sync::Arc;

use uuid::Uuid;

use crate::core::cache::GroupRoleCache;
use crate::core::error::CoreError;
use crate::core::usecases::ports::{RoleAssignmentRepository, RoleRepository};

/// Computes the effective role set for (user-internal-id, groups).
///
/// Never mutates cache or repository state. Group-derived roles always
/// succeed — cache reads cannot fail — so the only failure path is the
/// direct-role repository lookup.
pub struct RoleResolver {
    role_assignments: Arc<dyn RoleAssignmentRepository>,
    roles: Arc<dyn RoleRepository>,
    cache: Arc<GroupRoleCache>,
}

impl RoleResolver {
    pub fn new(
        role_assignments: Arc<dyn RoleAssignmentRepository>,
        roles: Arc<dyn RoleRepository>,
        cache: Arc<GroupRoleCache>,
    ) -> Self {
        Self {
            role_assignments,
            roles,
            cache,
        }
    }

    /// Union of the user's direct role assignments and the roles its
    /// groups map to, deduplicated. A service account with no direct
    /// assignment rows resolves entirely from `groups`.
    pub async fn resolve(&self, user_id: Uuid, groups: &[String]) -> Result<BTreeSet<String>, CoreError> {
        let direct = self.role_assignments.list_user_roles(user_id).await?;

        let mut resolved = BTreeSet::new();
        for assignment in direct {
            if let Some(role) = self.roles.find_by_id(assignment.role_id()).await? {
                resolved.insert(role.name().to_string());
            }
        }

        let group_roles = self
            .cache
            .roles_for_groups(groups.iter().map(|g| g.as_str()));
        resolved.extend(group_roles);

        Ok(resolved)
    }
}
