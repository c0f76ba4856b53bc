const ROLE_PREFIX: &str = "role:";

/// Forms the role-qualified subject a policy engine's static rows key on,
/// e.g. `role:platform-engineer`.
pub fn role_subject(role_name: &str) -> String {
    format!("{ROLE_PREFIX}{role_name}")
}
