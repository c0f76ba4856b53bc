// Admin cache-refresh DTO — the one fully wired wire endpoint
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response for `POST /admin/cache/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRefreshResponse {
    pub status: String,
    pub version: u64,
    pub groups: usize,
    pub timestamp: DateTime<Utc>,
}

impl CacheRefreshResponse {
    pub fn success(version: u64, groups: usize, timestamp: DateTime<Utc>) -> Self {
        Self {
            status: "success".to_string(),
            version,
            groups,
            timestamp,
        }
    }
}
