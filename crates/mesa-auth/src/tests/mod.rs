mod expiry;

use crate::Claims;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub(crate) fn create_test_token(claims: &Claims) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}

pub(crate) fn claims_expiring_at(exp: i64) -> Claims {
    Claims {
        exp: Some(exp),
        iat: Some(chrono::Utc::now().timestamp()),
        sub: Some("usr_8f2k1".to_string()),
    }
}
