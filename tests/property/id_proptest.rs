//! Property-based tests for wire id parsing

use proptest::prelude::*;

use domunity::shared::{parse_id, SharedError};

proptest! {
    #[test]
    fn test_positive_ids_parse(id in 1..=i32::MAX) {
        prop_assert_eq!(parse_id("building_id", &id.to_string()), Ok(id));
    }

    #[test]
    fn test_non_positive_ids_rejected(id in i32::MIN..=0) {
        let error = parse_id("building_id", &id.to_string()).unwrap_err();
        prop_assert_eq!(error.field(), "building_id");
    }

    #[test]
    fn test_non_numeric_rejected(raw in "[a-zA-Z][a-zA-Z0-9_-]{0,12}") {
        let result = parse_id("user_id", &raw);
        let is_validation_error = matches!(result, Err(SharedError::ValidationError { .. }));
        prop_assert!(is_validation_error);
    }
}
