//! Casbin-backed `PolicyEngine` adapter.
//!
//! Holds a single in-memory enforcer behind a `tokio::sync::RwLock`, mirroring
//! the read-many/write-rarely split the domain enforces at the port level:
//! `enforce` takes a read lock, the two `sync_*` admin operations take a
//! write lock. The object side of a policy row may be the literal `*`
//! wildcard, matching `Role::permission_pairs`'s fallback for actions with no
//! `object:action` separator.
//!
//! A role's `scope_predicate` (e.g. `env=="dev"`) travels with its policy
//! row as a fourth `cond` column, empty for an unscoped grant. The matcher
//! calls a registered custom function, `evalScope`, to weigh it against the
//! request's labels rather than widening the request/policy tuple with one
//! column per possible label key.

use std::sync::Arc;

use async_trait::async_trait;
use casbin::rhai::Dynamic;
use casbin::{function_map::OperatorFunction, CoreApi, DefaultModel, Enforcer, MemoryAdapter, MgmtApi};
use tokio::sync::RwLock;

use crate::core::error::CoreError;
use crate::core::usecases::ports::PolicyEngine;

const MODEL_CONF: &str = r#"
[request_definition]
r = sub, obj, act, labels

[policy_definition]
p = sub, obj, act, cond

[policy_effect]
e = some(where (p.eft == allow))

[matchers]
m = r.sub == p.sub && (r.obj == p.obj || p.obj == "*") && r.act == p.act && evalScope(p.cond, r.labels)
"#;

/// Casbin custom matcher function: `cond` is a role's scope predicate
/// (`""` for none), `labels` is the request's attribute labels encoded as
/// `encode_labels` below. Only the `key=="value"` shape from spec examples
/// is supported; anything else is treated as non-matching rather than as
/// an engine error, since the matcher has no way to surface one.
fn eval_scope(cond: String, labels: String) -> bool {
    let Some((key, expected)) = cond.split_once("==") else {
        return cond.is_empty();
    };
    let key = key.trim();
    let expected = expected.trim().trim_matches('"');
    labels
        .split(',')
        .filter_map(|pair| pair.split_once('='))
        .any(|(k, v)| k == key && v == expected)
}

fn eval_scope_dynamic(cond: Dynamic, labels: Dynamic) -> Dynamic {
    let cond = cond.into_string().unwrap_or_default();
    let labels = labels.into_string().unwrap_or_default();
    Dynamic::from(eval_scope(cond, labels))
}

fn encode_labels(labels: &[(String, String)]) -> String {
    labels.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join(",")
}

pub struct CasbinPolicyEngine {
    inner: Arc<RwLock<Enforcer>>,
}

impl CasbinPolicyEngine {
    /// Builds an enforcer over an empty in-memory policy store. Role
    /// bindings are populated entirely through `sync_role_policy`, never
    /// loaded from a file — the engine has no durable state of its own,
    /// the role repository does.
    pub async fn new() -> Result<Self, CoreError> {
        let model = DefaultModel::from_str(MODEL_CONF)
            .await
            .map_err(|err| CoreError::storage_unavailable(format!("casbin model: {err}")))?;
        let mut enforcer = Enforcer::new(model, MemoryAdapter::default())
            .await
            .map_err(|err| CoreError::storage_unavailable(format!("casbin enforcer: {err}")))?;
        enforcer.add_function("evalScope", OperatorFunction::Arg2(eval_scope_dynamic));
        Ok(Self {
            inner: Arc::new(RwLock::new(enforcer)),
        })
    }
}

#[async_trait]
impl PolicyEngine for CasbinPolicyEngine {
    async fn enforce(&self, subject: &str, object: &str, action: &str, labels: &[(String, String)]) -> Result<bool, CoreError> {
        self.inner
            .read()
            .await
            .enforce((subject, object, action, encode_labels(labels)))
            .map_err(|err| CoreError::storage_unavailable(format!("casbin enforce: {err}")))
    }

    async fn sync_role_policy(
        &self,
        role_subject: &str,
        object: &str,
        action: &str,
        scope_predicate: Option<&str>,
    ) -> Result<(), CoreError> {
        self.inner
            .write()
            .await
            .add_policy(vec![
                role_subject.to_string(),
                object.to_string(),
                action.to_string(),
                scope_predicate.unwrap_or_default().to_string(),
            ])
            .await
            .map_err(|err| CoreError::storage_unavailable(format!("casbin add_policy: {err}")))?;
        Ok(())
    }

    async fn remove_role_policies(&self, role_subject: &str) -> Result<(), CoreError> {
        self.inner
            .write()
            .await
            .remove_filtered_policy(0, vec![role_subject.to_string()])
            .await
            .map_err(|err| CoreError::storage_unavailable(format!("casbin remove_filtered_policy: {err}")))?;
        Ok(())
    }
}
