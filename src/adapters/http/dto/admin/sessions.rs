// Admin: session issuance DTOs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateSessionRequest {
    pub user_id: String,
}

impl CreateSessionRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id.is_empty() {
            return Err("user_id required".to_string());
        }
        Ok(())
    }
}

/// The plaintext session token appears here exactly once — the facade never
/// persists or re-derives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
