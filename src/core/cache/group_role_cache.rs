use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::core::error::CoreError;
use crate::core::usecases::ports::{Clock, RoleAssignmentRepository, RoleRepository};

use super::GroupRoleSnapshot;

/// A holder of a single current `GroupRoleSnapshot`.
///
/// `Get` is wait-free: it loads the current `Arc` with no lock acquired and
/// is safe alongside any number of concurrent `Get`s and at most one
/// concurrent `Refresh`. `Refresh` builds a fresh map off to the side and
/// installs it with a single atomic pointer store — readers never observe a
/// partially-built map, and a snapshot is never mutated after publication.
pub struct GroupRoleCache {
    current: ArcSwap<GroupRoleSnapshot>,
    role_assignments: Arc<dyn RoleAssignmentRepository>,
    roles: Arc<dyn RoleRepository>,
    clock: Arc<dyn Clock>,
    // Serializes write entry; never held across a Get. The facade also
    // serializes admin refreshes, but the cache enforces the invariant
    // itself so the "version strictly increases" guarantee holds regardless
    // of caller discipline.
    refresh_guard: Mutex<()>,
}

impl GroupRoleCache {
    pub fn new(
        role_assignments: Arc<dyn RoleAssignmentRepository>,
        roles: Arc<dyn RoleRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            current: ArcSwap::from_pointee(GroupRoleSnapshot::empty()),
            role_assignments,
            roles,
            clock,
            refresh_guard: Mutex::new(()),
        }
    }

    /// Wait-free read of the current snapshot. Never fails.
    pub fn get(&self) -> Arc<GroupRoleSnapshot> {
        self.current.load_full()
    }

    pub fn version(&self) -> u64 {
        self.current.load().version()
    }

    pub fn group_count(&self) -> usize {
        self.current.load().group_count()
    }

    /// Pure function over the current snapshot: the union of role names
    /// mapped from any group in `groups`. An unknown group contributes
    /// nothing; empty input yields the empty set.
    pub fn roles_for_groups<'a>(&self, groups: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
        self.current.load().roles_for_groups(groups)
    }

    /// Loads all group-role assignments and the role-name index, builds a
    /// fresh mapping, and atomically installs it. Fails with
    /// {storage-unavailable} only — on failure the previous snapshot is
    /// left untouched, so readers keep serving the last good state.
    pub async fn refresh(&self) -> Result<u64, CoreError> {
        let _guard = self.refresh_guard.lock().await;

        let assignments = self.role_assignments.list_all_group_roles().await?;
        let roles = self.roles.list_all().await?;
        let role_names: HashMap<Uuid, String> =
            roles.into_iter().map(|role| (role.id(), role.name().to_string())).collect();

        let mut groups: HashMap<String, BTreeSet<String>> = HashMap::new();
        for assignment in assignments {
            match role_names.get(&assignment.role_id()) {
                Some(name) => {
                    groups
                        .entry(assignment.group_name().to_string())
                        .or_default()
                        .insert(name.clone());
                }
                None => {
                    tracing::warn!(
                        group = assignment.group_name(),
                        role_id = %assignment.role_id(),
                        "dropping group-role assignment referencing a deleted role"
                    );
                }
            }
        }

        let next_version = self.current.load().version() + 1;
        if groups.is_empty() {
            tracing::warn!(version = next_version, "cache refresh published an empty snapshot");
        }

        let snapshot = GroupRoleSnapshot::new(next_version, self.clock.now(), groups);
        self.current.store(Arc::new(snapshot));
        Ok(next_version)
    }
}
