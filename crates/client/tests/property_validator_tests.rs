//! Property-based tests for the enumerated validators.
//!
//! This module uses proptest to verify:
//! - Every declared token parses and round-trips unchanged.
//! - Every token outside the declared set fails with a message naming
//!   the offending value.
//! - Serde serialization and `FromStr` agree.

use proptest::prelude::*;
use actinia_client::{ParamSchemaSubType, ParamSchemaType, RequestStatus};

/// Strategy over arbitrary lowercase tokens, most of which are not in
/// any vocabulary.
fn token_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.]{1,20}"
}

proptest! {
    #[test]
    fn request_status_valid_tokens_round_trip(index in 0usize..RequestStatus::VARIANTS.len()) {
        let token = RequestStatus::VARIANTS[index];
        let parsed: RequestStatus = token.parse().unwrap();
        prop_assert_eq!(parsed.as_str(), token);

        let json = serde_json::to_string(&parsed).unwrap();
        let back: RequestStatus = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, parsed);
    }

    #[test]
    fn request_status_unknown_tokens_fail_with_value(token in token_strategy()) {
        prop_assume!(!RequestStatus::VARIANTS.contains(&token.as_str()));
        let err = token.parse::<RequestStatus>().unwrap_err();
        let needle = format!("'{}'", token);
        let contains_value = err.to_string().contains(&needle);
        prop_assert!(contains_value);
        prop_assert!(err.to_string().contains("is not a valid option"));
    }

    #[test]
    fn param_schema_type_valid_tokens_round_trip(index in 0usize..ParamSchemaType::VARIANTS.len()) {
        let token = ParamSchemaType::VARIANTS[index];
        let parsed: ParamSchemaType = token.parse().unwrap();
        prop_assert_eq!(parsed.as_str(), token);
    }

    #[test]
    fn param_schema_type_unknown_tokens_fail(token in token_strategy()) {
        prop_assume!(!ParamSchemaType::VARIANTS.contains(&token.as_str()));
        let err = token.parse::<ParamSchemaType>().unwrap_err();
        prop_assert!(err.to_string().contains("is not a valid option"));
    }

    #[test]
    fn param_schema_subtype_valid_tokens_round_trip(index in 0usize..ParamSchemaSubType::VARIANTS.len()) {
        let token = ParamSchemaSubType::VARIANTS[index];
        let parsed: ParamSchemaSubType = token.parse().unwrap();
        prop_assert_eq!(parsed.as_str(), token);
    }

    #[test]
    fn param_schema_subtype_unknown_tokens_fail(token in token_strategy()) {
        prop_assume!(!ParamSchemaSubType::VARIANTS.contains(&token.as_str()));
        let err = token.parse::<ParamSchemaSubType>().unwrap_err();
        prop_assert!(err.to_string().contains("is not a valid option"));
    }
}
