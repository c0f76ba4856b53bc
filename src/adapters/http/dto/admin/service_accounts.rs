// Admin: service-account provisioning and secret rotation DTOs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateServiceAccountRequest {
    pub client_id: String,
}

impl CreateServiceAccountRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.client_id.is_empty() {
            return Err("client_id required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceAccountResponse {
    pub id: String,
    pub client_id: String,
    pub secret: String,
}

/// The plaintext secret appears here exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotateSecretResponse {
    pub id: String,
    pub secret: String,
}
