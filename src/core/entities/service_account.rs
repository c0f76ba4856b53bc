use uuid::Uuid;

use crate::core::credentials::StoredCredential;

/// The sentinel value stored in a service account's secret-hash column to
/// mark it as governed entirely by an external identity provider — it never
/// has a presentable secret of its own.
pub const EXTERNAL_IDP_MANAGED: &str = "EXTERNAL_IDP_MANAGED";

/// A service-account record.
///
/// `secret_hash` is either a real Argon2id hash of a generated secret, or
/// the `EXTERNAL_IDP_MANAGED` sentinel for accounts whose authority lives
/// entirely with the external identity provider.
#[derive(Debug, Clone)]
pub struct ServiceAccount {
    id: Uuid,
    client_id: String,
    secret_hash: StoredCredential,
    disabled: bool,
    creator_id: Uuid,
}

impl ServiceAccount {
    pub fn new(
        id: Uuid,
        client_id: impl Into<String>,
        secret_hash: StoredCredential,
        creator_id: Uuid,
    ) -> Self {
        Self {
            id,
            client_id: client_id.into(),
            secret_hash,
            disabled: false,
            creator_id,
        }
    }

    /// Constructs an externally-governed account: `secret_hash` is the
    /// `EXTERNAL_IDP_MANAGED` sentinel, never a real hash.
    pub fn externally_managed(id: Uuid, client_id: impl Into<String>, creator_id: Uuid) -> Self {
        Self::new(
            id,
            client_id,
            StoredCredential::from_hash(EXTERNAL_IDP_MANAGED),
            creator_id,
        )
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn secret_hash(&self) -> &StoredCredential {
        &self.secret_hash
    }

    pub fn creator_id(&self) -> Uuid {
        self.creator_id
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}
