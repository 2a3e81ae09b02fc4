use serde::{Deserialize, Serialize};

/// Claims carried in a bearer token's payload segment.
///
/// Every field is optional: third-party OAuth providers issue tokens whose
/// payloads do not follow the standard registered-claim set, and this
/// client only ever inspects what is present. Unknown claims are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration timestamp (Unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Issued at timestamp (Unix seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Subject (user id).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}
