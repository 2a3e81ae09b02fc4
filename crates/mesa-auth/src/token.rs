use crate::{AuthError, Claims, Result as AuthErrorResult};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Decode the claims segment of a three-segment bearer token.
///
/// Only the middle segment is inspected. The signature is never verified
/// here: the token was issued by the backend, and this client only needs
/// the local claims to evaluate expiry without a network call.
#[track_caller]
pub fn decode_claims(token: &str) -> AuthErrorResult<Claims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
        return Err(AuthError::malformed_token(
            "expected three non-empty dot-separated segments",
        ));
    }

    // Some issuers pad the payload segment even though base64url forbids it.
    let payload = segments[1].trim_end_matches('=');

    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(AuthError::claims_encoding)?;

    serde_json::from_slice(&decoded).map_err(AuthError::claims_json)
}
