//! Property-based tests for session tokens

use proptest::prelude::*;

use domunity::backend::auth::SessionKeys;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_access_token_round_trip(user_id in 1..i32::MAX, local in "[a-z0-9]{1,16}") {
        let keys = SessionKeys::new("property-secret");
        let email = format!("{}@example.com", local);

        let token = keys.create_access_token(user_id, &email).unwrap();
        let claims = keys.verify_token(&token).unwrap();

        prop_assert_eq!(claims.sub, user_id.to_string());
        prop_assert_eq!(claims.email, Some(email));
    }

    #[test]
    fn test_refresh_preserves_subject(user_id in 1..i32::MAX) {
        let keys = SessionKeys::new("property-secret");

        let refresh = keys.create_refresh_token(user_id).unwrap();
        let access = keys.refresh_access_token(&refresh).unwrap();
        let claims = keys.verify_token(&access).unwrap();

        prop_assert_eq!(claims.sub, user_id.to_string());
        prop_assert!(claims.email.is_none());
    }

    #[test]
    fn test_foreign_secret_rejected(user_id in 1..i32::MAX, secret in "[a-zA-Z0-9]{8,32}") {
        prop_assume!(secret != "property-secret");
        let token = SessionKeys::new(&secret).create_refresh_token(user_id).unwrap();

        prop_assert!(SessionKeys::new("property-secret").verify_token(&token).is_err());
    }
}
