use std::sync::Arc;

use crate::core::error::CoreError;
use crate::core::identity::Principal;
use crate::core::usecases::ports::PolicyEngine;

use super::policy_subject::role_subject;

/// Decides whether a `Principal` may perform an action, never mutating
/// policy state itself.
///
/// For each of the principal's roles, asks the underlying engine whether
/// the role-qualified subject grants `(object, action, labels)`. The first
/// grant short-circuits; role iteration order is insertion order (the
/// `Principal`'s `BTreeSet<String>` ordering) and is irrelevant to the
/// result since a single grant wins regardless of which role produced it.
pub struct PolicyEvaluator {
    engine: Arc<dyn PolicyEngine>,
}

impl PolicyEvaluator {
    pub fn new(engine: Arc<dyn PolicyEngine>) -> Self {
        Self { engine }
    }

    pub async fn authorize(
        &self,
        principal: &Principal,
        object: &str,
        action: &str,
        labels: &[(String, String)],
    ) -> Result<bool, CoreError> {
        for role in principal.roles() {
            let subject = role_subject(role);
            if self.engine.enforce(&subject, object, action, labels).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
