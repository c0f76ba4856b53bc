use uuid::Uuid;

/// A direct binding of a role to a single user. Read per-request (never
/// flows through the group→role cache); insertion and removal are admin
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRoleAssignment {
    user_id: Uuid,
    role_id: Uuid,
    assigned_by: Uuid,
}

impl UserRoleAssignment {
    pub fn new(user_id: Uuid, role_id: Uuid, assigned_by: Uuid) -> Self {
        Self {
            user_id,
            role_id,
            assigned_by,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn role_id(&self) -> Uuid {
        self.role_id
    }

    pub fn assigned_by(&self) -> Uuid {
        self.assigned_by
    }
}

/// A binding of a role to a group name. Both sides of an assignment must be
/// visible in the next snapshot refresh — this is the type the group→role
/// cache's refresh reads in bulk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRoleAssignment {
    group_name: String,
    role_id: Uuid,
    assigned_by: Uuid,
}

impl GroupRoleAssignment {
    pub fn new(group_name: impl Into<String>, role_id: Uuid, assigned_by: Uuid) -> Self {
        Self {
            group_name: group_name.into(),
            role_id,
            assigned_by,
        }
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn role_id(&self) -> Uuid {
        self.role_id
    }

    pub fn assigned_by(&self) -> Uuid {
        self.assigned_by
    }
}
