use crate::token::decode_claims;

/// Expiry information extracted from a token's local claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenExpiry {
    /// `exp` claim present: Unix seconds at which the token dies.
    At(i64),
    /// No usable `exp` claim - missing, or the claims segment does not
    /// decode at all.
    Unknown,
}

/// Read a token's expiry from its claims segment.
///
/// Structural problems and nonstandard payloads both collapse to
/// `Unknown`; what that means for authentication is the policy's call.
pub fn token_expiry(token: &str) -> TokenExpiry {
    match decode_claims(token) {
        Ok(claims) => match claims.exp {
            Some(exp) => TokenExpiry::At(exp),
            None => TokenExpiry::Unknown,
        },
        Err(_) => TokenExpiry::Unknown,
    }
}

/// How to treat a token whose expiry cannot be determined.
///
/// Certain OAuth providers establish identity via server-side session
/// cookies and hand back tokens without a standard `exp` claim, so a
/// missing expiry is not necessarily a dead session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpiryPolicy {
    /// Unknown expiry is treated as a live token.
    #[default]
    UnknownIsValid,
    /// Unknown expiry is treated as expired.
    UnknownIsInvalid,
}

impl ExpiryPolicy {
    /// Whether `token` is expired at `now` (Unix seconds) under this
    /// policy. An `exp` at or before `now` is always expired.
    pub fn is_expired_at(&self, token: &str, now: i64) -> bool {
        match token_expiry(token) {
            TokenExpiry::At(exp) => exp <= now,
            TokenExpiry::Unknown => matches!(self, Self::UnknownIsInvalid),
        }
    }

    /// Whether `token` is expired right now. Re-evaluated against the
    /// wall clock on every call - expiry is a predicate, not a state.
    pub fn is_expired(&self, token: &str) -> bool {
        self.is_expired_at(token, chrono::Utc::now().timestamp())
    }
}
