use mesa_core::Identity;

use std::collections::HashSet;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;

pub const STORAGE_KEY: &str = "mesa.session";

pub fn token_expiring_in(secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    encode(
        &Header::new(Algorithm::HS256),
        &json!({ "exp": now + secs, "iat": now, "sub": "usr_8f2k1" }),
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}

pub fn sample_identity(token: Option<String>) -> Identity {
    Identity {
        id: "usr_8f2k1".to_string(),
        email: "a@b.com".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Byron".to_string()),
        roles: HashSet::from(["USER".to_string(), "ADMIN".to_string()]),
        token,
    }
}
