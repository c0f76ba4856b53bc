use crate::core::entities::{ServiceAccount, Session};

/// `create-session`'s result: the plaintext token is present exactly once,
/// here, and never persisted — the repository only ever sees its hash.
pub struct CreateSessionOutcome {
    pub session: Session,
    pub plaintext_token: String,
}

/// `rotate-service-account-secret`'s result: same one-time-plaintext shape
/// as `CreateSessionOutcome`.
pub struct RotateSecretOutcome {
    pub service_account: ServiceAccount,
    pub plaintext_secret: String,
}

/// `refresh-group-role-cache`'s result, mirrored directly into the admin
/// HTTP endpoint's response body.
pub struct CacheRefreshOutcome {
    pub version: u64,
    pub groups: usize,
}
