use crate::{CoreError, Identity};

use std::collections::HashSet;

fn sample_identity() -> Identity {
    Identity {
        id: "usr_8f2k1".to_string(),
        email: "a@b.com".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Byron".to_string()),
        roles: HashSet::from(["USER".to_string()]),
        token: None,
    }
}

#[test]
fn given_valid_data_when_serialize_roundtrip_then_preserves_all_fields() {
    let mut original = sample_identity();
    original.token = Some("aaa.bbb.ccc".to_string());

    let json = serde_json::to_string(&original).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[test]
fn given_missing_optional_fields_when_deserialize_then_defaults() {
    let json = r#"{"id":"usr_1","email":"a@b.com"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert!(identity.first_name.is_none());
    assert!(identity.last_name.is_none());
    assert!(identity.roles.is_empty());
    assert!(identity.token.is_none());
}

#[test]
fn given_unknown_fields_when_deserialize_then_ignored() {
    let json = r#"{"id":"usr_1","email":"a@b.com","avatar":"x.png"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.id, "usr_1");
}

#[test]
fn given_no_token_when_serialize_then_token_key_omitted() {
    let json = serde_json::to_string(&sample_identity()).unwrap();

    assert!(!json.contains("token"));
}

#[test]
fn given_duplicate_roles_when_deserialize_then_deduplicated() {
    let json = r#"{"id":"usr_1","email":"a@b.com","roles":["USER","ADMIN","USER"]}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.roles.len(), 2);
    assert!(identity.has_role("USER"));
    assert!(identity.has_role("ADMIN"));
}

#[test]
fn given_three_segment_token_when_validate_then_ok() {
    let mut identity = sample_identity();
    identity.token = Some("header.payload.signature".to_string());

    assert!(identity.validate().is_ok());
}

#[test]
fn given_two_segment_token_when_validate_then_malformed_token_error() {
    let mut identity = sample_identity();
    identity.token = Some("header.payload".to_string());

    let result = identity.validate();

    assert!(matches!(result, Err(CoreError::MalformedToken { .. })));
}

#[test]
fn given_empty_segment_token_when_validate_then_malformed_token_error() {
    let mut identity = sample_identity();
    identity.token = Some("header..signature".to_string());

    let result = identity.validate();

    assert!(matches!(result, Err(CoreError::MalformedToken { .. })));
}

#[test]
fn given_no_token_when_validate_then_ok() {
    assert!(sample_identity().validate().is_ok());
}

#[test]
fn given_empty_email_when_validate_then_validation_error() {
    let mut identity = sample_identity();
    identity.email = String::new();

    let result = identity.validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_name_parts_when_display_name_then_joins_present_parts() {
    let mut identity = sample_identity();
    assert_eq!(identity.display_name(), "Ada Byron");

    identity.last_name = None;
    assert_eq!(identity.display_name(), "Ada");

    identity.first_name = None;
    assert_eq!(identity.display_name(), "a@b.com");
}
