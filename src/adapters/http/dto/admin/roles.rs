// Admin: role and assignment DTOs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateRoleRequest {
    pub name: String,
    pub description: String,
    pub actions: Vec<String>,
    pub scope_predicate: Option<String>,
}

impl CreateRoleRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("name required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub actions: Vec<String>,
    pub version: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssignUserRoleRequest {
    pub user_id: String,
    pub role_id: String,
}

impl AssignUserRoleRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id.is_empty() || self.role_id.is_empty() {
            return Err("user_id and role_id required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssignGroupRoleRequest {
    pub group_name: String,
    pub role_id: String,
}

impl AssignGroupRoleRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.group_name.is_empty() || self.role_id.is_empty() {
            return Err("group_name and role_id required".to_string());
        }
        Ok(())
    }
}
