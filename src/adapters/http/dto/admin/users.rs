// Admin: user provisioning DTOs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateUserRequest {
    pub subject: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.subject.is_empty() {
            return Err("subject required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub id: String,
    pub subject: String,
}
