//! Property-based tests for user identities

use callrelay::shared::UserIdentity;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_identity_generation_is_unique(_ in 0..100u32) {
        prop_assert_ne!(UserIdentity::generate(), UserIdentity::generate());
    }

    #[test]
    fn test_identity_serializes_as_bare_string(value in ".*") {
        let identity = UserIdentity::new(value.clone());
        let json = serde_json::to_value(&identity).unwrap();
        prop_assert_eq!(json, serde_json::Value::String(value));
    }
}
