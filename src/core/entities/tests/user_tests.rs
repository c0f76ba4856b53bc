use uuid::Uuid;

use crate::core::entities::User;

#[test]
fn test_new_user_is_not_disabled() {
    let user = User::new(Uuid::new_v4(), "alice@example.com");
    assert!(!user.is_disabled());
    assert_eq!(user.subject(), "alice@example.com");
}

#[test]
fn test_disable_builder() {
    let user = User::new(Uuid::new_v4(), "alice@example.com").disabled(true);
    assert!(user.is_disabled());
}

#[test]
fn test_externally_provisioned_flag_tracks_oidc_subject() {
    let user = User::new(Uuid::new_v4(), "alice@example.com");
    assert!(!user.is_externally_provisioned());

    let user = user.with_oidc_subject("oidc|alice");
    assert!(user.is_externally_provisioned());
    assert_eq!(user.oidc_subject(), Some("oidc|alice"));
}
