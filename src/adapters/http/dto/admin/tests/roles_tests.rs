use crate::adapters::http::dto::admin::roles::{AssignGroupRoleRequest, AssignUserRoleRequest, CreateRoleRequest};

#[test]
fn test_create_role_request_requires_name() {
    let request = CreateRoleRequest {
        name: String::new(),
        description: "desc".to_string(),
        actions: vec![],
        scope_predicate: None,
    };
    assert!(request.validate().is_err());
}

#[test]
fn test_assign_user_role_request_requires_both_ids() {
    let request = AssignUserRoleRequest {
        user_id: "u1".to_string(),
        role_id: String::new(),
    };
    assert!(request.validate().is_err());
}

#[test]
fn test_assign_group_role_request_requires_both_fields() {
    let request = AssignGroupRoleRequest {
        group_name: "platform-engineers".to_string(),
        role_id: "r1".to_string(),
    };
    assert!(request.validate().is_ok());
}
