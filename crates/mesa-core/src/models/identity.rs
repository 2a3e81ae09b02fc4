use crate::{CoreError, Result as CoreErrorResult};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The currently signed-in principal.
///
/// Owned by the session manager, which is the sole writer. An identity is
/// always replaced as a whole unit - never partially mutated - so readers
/// can never observe a torn value. The serialized form of this struct is
/// exactly the persisted session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque identifier assigned by the backend.
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Role labels. Unique, order-irrelevant.
    #[serde(default)]
    pub roles: HashSet<String>,
    /// Bearer token, when the login flow issued one. OAuth flows that rely
    /// on server-side session cookies leave this absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Identity {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Full display name from whichever name parts are present, falling
    /// back to the email address.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }

    /// Validate the structural token invariant.
    ///
    /// A present token must be three non-empty dot-separated segments.
    /// Claims decoding and expiry are out of scope here.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.email.is_empty() {
            return Err(CoreError::validation("email cannot be empty"));
        }

        if let Some(token) = &self.token {
            let segments: Vec<&str> = token.split('.').collect();
            if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
                return Err(CoreError::malformed_token(
                    "expected three non-empty dot-separated segments",
                ));
            }
        }

        Ok(())
    }
}
