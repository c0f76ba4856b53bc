// Tests for the cache-refresh response DTO
use crate::adapters::http::dto::public::cache_refresh::CacheRefreshResponse;

#[test]
fn test_cache_refresh_response_success_shape() {
    let now = "2026-07-31T00:00:00Z".parse().unwrap();
    let response = CacheRefreshResponse::success(7, 3, now);

    assert_eq!(response.status, "success");
    assert_eq!(response.version, 7);
    assert_eq!(response.groups, 3);
    assert_eq!(response.timestamp, now);
}

#[test]
fn test_cache_refresh_response_serializes_expected_fields() {
    let now = "2026-07-31T00:00:00Z".parse().unwrap();
    let response = CacheRefreshResponse::success(1, 0, now);
    let json = serde_json::to_string(&response).expect("should serialize");

    assert!(json.contains("\"status\":\"success\""));
    assert!(json.contains("\"version\":1"));
    assert!(json.contains("\"groups\":0"));
}
