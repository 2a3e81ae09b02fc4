use crate::expiry::token_expiry;
use crate::tests::{claims_expiring_at, create_test_token};
use crate::{Claims, ExpiryPolicy, TokenExpiry};

fn token_without_exp() -> String {
    create_test_token(&Claims {
        exp: None,
        iat: None,
        sub: Some("usr_8f2k1".to_string()),
    })
}

#[test]
fn given_exp_claim_when_token_expiry_then_returns_at() {
    let token = create_test_token(&claims_expiring_at(1_700_000_000));

    assert_eq!(token_expiry(&token), TokenExpiry::At(1_700_000_000));
}

#[test]
fn given_no_exp_claim_when_token_expiry_then_unknown() {
    assert_eq!(token_expiry(&token_without_exp()), TokenExpiry::Unknown);
}

#[test]
fn given_undecodable_token_when_token_expiry_then_unknown() {
    assert_eq!(token_expiry("not-even-a-token"), TokenExpiry::Unknown);
}

#[test]
fn given_future_exp_when_is_expired_at_then_false() {
    let token = create_test_token(&claims_expiring_at(1000));

    assert!(!ExpiryPolicy::UnknownIsValid.is_expired_at(&token, 999));
}

#[test]
fn given_exp_equal_to_now_when_is_expired_at_then_true() {
    let token = create_test_token(&claims_expiring_at(1000));

    assert!(ExpiryPolicy::UnknownIsValid.is_expired_at(&token, 1000));
}

#[test]
fn given_past_exp_when_is_expired_at_then_true() {
    let token = create_test_token(&claims_expiring_at(1000));

    assert!(ExpiryPolicy::UnknownIsValid.is_expired_at(&token, 1001));
}

#[test]
fn given_unknown_expiry_when_policy_valid_then_not_expired() {
    assert!(!ExpiryPolicy::UnknownIsValid.is_expired_at(&token_without_exp(), 1000));
}

#[test]
fn given_unknown_expiry_when_policy_invalid_then_expired() {
    assert!(ExpiryPolicy::UnknownIsInvalid.is_expired_at(&token_without_exp(), 1000));
}

#[test]
fn given_decodable_exp_when_policy_invalid_then_exp_is_authoritative() {
    let token = create_test_token(&claims_expiring_at(2000));

    assert!(!ExpiryPolicy::UnknownIsInvalid.is_expired_at(&token, 1000));
}

#[test]
fn given_expired_token_when_is_expired_then_true_against_wall_clock() {
    let token = create_test_token(&claims_expiring_at(
        chrono::Utc::now().timestamp() - 3600,
    ));

    assert!(ExpiryPolicy::UnknownIsValid.is_expired(&token));
}
