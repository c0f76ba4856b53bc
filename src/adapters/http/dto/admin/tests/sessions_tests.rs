use crate::adapters::http::dto::admin::sessions::CreateSessionRequest;

#[test]
fn test_create_session_request_requires_user_id() {
    let request = CreateSessionRequest {
        user_id: String::new(),
    };
    assert!(request.validate().is_err());
}

#[test]
fn test_create_session_request_valid() {
    let request = CreateSessionRequest {
        user_id: "00000000-0000-0000-0000-000000000001".to_string(),
    };
    assert!(request.validate().is_ok());
}
