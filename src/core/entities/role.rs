use std::collections::BTreeMap;

use uuid::Uuid;

/// A named bundle of permitted (object, action) pairs, optionally scoped by
/// a label predicate.
///
/// `version` is the optimistic-concurrency counter `update-role` checks
/// against; a stale caller's update is rejected with {precondition-failed}
/// rather than silently overwriting a concurrent change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: Uuid,
    name: String,
    description: String,
    scope_predicate: Option<String>,
    constraints: BTreeMap<String, String>,
    immutable_attributes: Vec<String>,
    actions: Vec<String>,
    version: i64,
}

impl Role {
    pub fn new(id: Uuid, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            scope_predicate: None,
            constraints: BTreeMap::new(),
            immutable_attributes: Vec::new(),
            actions: Vec::new(),
            version: 1,
        }
    }

    pub fn with_scope_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.scope_predicate = Some(predicate.into());
        self
    }

    pub fn with_constraints(mut self, constraints: BTreeMap<String, String>) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_immutable_attributes(mut self, attributes: Vec<String>) -> Self {
        self.immutable_attributes = attributes;
        self
    }

    pub fn with_actions(mut self, actions: Vec<String>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn scope_predicate(&self) -> Option<&str> {
        self.scope_predicate.as_deref()
    }

    pub fn constraints(&self) -> &BTreeMap<String, String> {
        &self.constraints
    }

    pub fn immutable_attributes(&self) -> &[String] {
        &self.immutable_attributes
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Splits each stored action entry into its `(object, action)` pair.
    /// Entries are stored as `object:action`; an entry with no separator is
    /// treated as applying to every object.
    pub fn permission_pairs(&self) -> Vec<(&str, &str)> {
        self.actions
            .iter()
            .map(|entry| entry.split_once(':').unwrap_or(("*", entry.as_str())))
            .collect()
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn permits_action(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }

    pub fn forbids_mutating(&self, attribute: &str) -> bool {
        self.immutable_attributes.iter().any(|a| a == attribute)
    }

    /// Returns a copy of this role with `version` incremented, as the
    /// repository persists after a successful optimistic-version update.
    pub fn next_version(&self) -> i64 {
        self.version + 1
    }
}
