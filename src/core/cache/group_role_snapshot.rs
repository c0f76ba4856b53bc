use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};

/// An immutable mapping from group name to the set of role names it grants.
///
/// Never mutated after construction; the cache supersedes one snapshot with
/// the next via a single atomic pointer store, never by patching this value
/// in place.
#[derive(Debug, Clone)]
pub struct GroupRoleSnapshot {
    version: u64,
    created_at: DateTime<Utc>,
    groups: HashMap<String, BTreeSet<String>>,
}

impl GroupRoleSnapshot {
    pub fn new(version: u64, created_at: DateTime<Utc>, groups: HashMap<String, BTreeSet<String>>) -> Self {
        Self {
            version,
            created_at,
            groups,
        }
    }

    /// The snapshot prior to the first successful refresh: version 0, no
    /// mappings. Never installed into the cache; used only to seed it before
    /// startup's synchronous first refresh runs.
    pub fn empty() -> Self {
        Self {
            version: 0,
            created_at: DateTime::UNIX_EPOCH,
            groups: HashMap::new(),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Union of role names mapped from any group in `groups`. An unknown
    /// group contributes nothing; the empty input yields the empty set.
    pub fn roles_for_groups<'a>(&self, groups: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
        let mut result = BTreeSet::new();
        for group in groups {
            if let Some(roles) = self.groups.get(group) {
                result.extend(roles.iter().cloned());
            }
        }
        result
    }

    pub fn roles_for_group(&self, group: &str) -> BTreeSet<String> {
        self.groups.get(group).cloned().unwrap_or_default()
    }
}
