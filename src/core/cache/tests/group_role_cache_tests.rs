use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::cache::GroupRoleCache;
use crate::core::entities::{GroupRoleAssignment, Role, UserRoleAssignment};
use crate::core::error::CoreError;
use crate::core::usecases::ports::{Clock, RoleAssignmentRepository, RoleRepository};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct FakeRoles(Vec<Role>);

#[async_trait]
impl RoleRepository for FakeRoles {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, CoreError> {
        Ok(self.0.iter().find(|r| r.name() == name).cloned())
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Role>, CoreError> {
        Ok(self.0.iter().find(|r| r.id() == id).cloned())
    }
    async fn list_all(&self) -> Result<Vec<Role>, CoreError> {
        Ok(self.0.clone())
    }
    async fn create(&self, role: Role) -> Result<Role, CoreError> {
        Ok(role)
    }
    async fn update(&self, role: Role, _expected_version: i64) -> Result<Role, CoreError> {
        Ok(role)
    }
    async fn delete(&self, _id: Uuid) -> Result<(), CoreError> {
        Ok(())
    }
}

struct FakeAssignments(Vec<GroupRoleAssignment>);

#[async_trait]
impl RoleAssignmentRepository for FakeAssignments {
    async fn assign_user_role(&self, _assignment: UserRoleAssignment) -> Result<(), CoreError> {
        Ok(())
    }
    async fn remove_user_role(&self, _user_id: Uuid, _role_id: Uuid) -> Result<(), CoreError> {
        Ok(())
    }
    async fn list_user_roles(&self, _user_id: Uuid) -> Result<Vec<UserRoleAssignment>, CoreError> {
        Ok(vec![])
    }
    async fn assign_group_role(&self, _assignment: GroupRoleAssignment) -> Result<(), CoreError> {
        Ok(())
    }
    async fn remove_group_role(&self, _group_name: &str, _role_id: Uuid) -> Result<(), CoreError> {
        Ok(())
    }
    async fn list_all_group_roles(&self) -> Result<Vec<GroupRoleAssignment>, CoreError> {
        Ok(self.0.clone())
    }
    async fn role_is_referenced(&self, _role_id: Uuid) -> Result<bool, CoreError> {
        Ok(false)
    }
}

fn build_cache(roles: Vec<Role>, assignments: Vec<GroupRoleAssignment>) -> GroupRoleCache {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock("2026-07-31T00:00:00Z".parse().unwrap()));
    let roles: Arc<dyn RoleRepository> = Arc::new(FakeRoles(roles));
    let assignments: Arc<dyn RoleAssignmentRepository> = Arc::new(FakeAssignments(assignments));
    GroupRoleCache::new(assignments, roles, clock)
}

#[tokio::test]
async fn test_get_before_first_refresh_is_empty_and_never_fails() {
    let cache = build_cache(vec![], vec![]);
    assert_eq!(cache.version(), 0);
    assert_eq!(cache.group_count(), 0);
}

#[tokio::test]
async fn test_refresh_builds_mapping_from_assignments() {
    let role = Role::new(Uuid::new_v4(), "product-engineer", "desc");
    let assignment = GroupRoleAssignment::new("product-engineers", role.id(), Uuid::new_v4());
    let cache = build_cache(vec![role], vec![assignment]);

    let version = cache.refresh().await.unwrap();
    assert_eq!(version, 1);
    assert_eq!(cache.group_count(), 1);
    assert!(cache.roles_for_groups(["product-engineers"]).contains("product-engineer"));
}

#[tokio::test]
async fn test_refresh_drops_assignment_referencing_deleted_role() {
    let dangling_role_id = Uuid::new_v4();
    let assignment = GroupRoleAssignment::new("product-engineers", dangling_role_id, Uuid::new_v4());
    let cache = build_cache(vec![], vec![assignment]);

    cache.refresh().await.unwrap();
    assert_eq!(cache.group_count(), 0);
}

#[tokio::test]
async fn test_refresh_publishes_empty_snapshot_on_full_wipe() {
    let cache = build_cache(vec![], vec![]);
    cache.refresh().await.unwrap();
    assert_eq!(cache.version(), 1);
    assert_eq!(cache.group_count(), 0);
}

#[tokio::test]
async fn test_refresh_version_is_monotonic() {
    let role = Role::new(Uuid::new_v4(), "product-engineer", "desc");
    let assignment = GroupRoleAssignment::new("product-engineers", role.id(), Uuid::new_v4());
    let cache = build_cache(vec![role], vec![assignment]);

    let v1 = cache.refresh().await.unwrap();
    let v2 = cache.refresh().await.unwrap();
    assert!(v2 > v1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_snapshot_atomicity_under_concurrent_reads_and_refreshes() {
    let role = Role::new(Uuid::new_v4(), "product-engineer", "desc");
    let role_id = role.id();
    let assignment = GroupRoleAssignment::new("product-engineers", role_id, Uuid::new_v4());
    let cache = Arc::new(build_cache(vec![role], vec![assignment]));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..50 {
                let snapshot = cache.get();
                // Every observed snapshot must be internally consistent: if
                // the group is present at all, its role set is exactly what
                // a single completed refresh would have produced.
                if snapshot.group_count() > 0 {
                    assert_eq!(
                        snapshot.roles_for_groups(["product-engineers"]),
                        std::collections::BTreeSet::from(["product-engineer".to_string()])
                    );
                }
            }
        }));
    }
    for _ in 0..4 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            cache.refresh().await.unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    assert!(cache.version() >= 1);
}
