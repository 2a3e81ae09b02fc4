
use mesa_core::Identity;
use mesa_store::{Result as StoreErrorResult, SessionStore, StoreError};

use std::collections::HashSet;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde_json::json;

pub(crate) const STORAGE_KEY: &str = "mesa.session";

pub(crate) fn token_expiring_in(secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    encode(
        &Header::new(Algorithm::HS256),
        &json!({ "exp": now + secs, "iat": now, "sub": "usr_8f2k1" }),
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}

pub(crate) fn token_without_exp() -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &json!({ "sub": "usr_8f2k1" }),
        &EncodingKey::from_secret(b"test-secret-key-at-least-32-bytes"),
    )
    .unwrap()
}

pub(crate) fn identity_with_token(token: Option<String>) -> Identity {
    Identity {
        id: "usr_8f2k1".to_string(),
        email: "a@b.com".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: None,
        roles: HashSet::from(["USER".to_string()]),
        token,
    }
}

/// Simulates a backend whose storage primitive rejects every call.
pub(crate) struct FailingStore;

#[async_trait]
impl SessionStore for FailingStore {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn load(&self, _key: &str) -> StoreErrorResult<Option<String>> {
        Err(StoreError::unavailable("simulated outage"))
    }

    async fn save(&self, _key: &str, _value: &str) -> StoreErrorResult<()> {
        Err(StoreError::unavailable("simulated outage"))
    }

    async fn delete(&self, _key: &str) -> StoreErrorResult<()> {
        Err(StoreError::unavailable("simulated outage"))
    }
}
