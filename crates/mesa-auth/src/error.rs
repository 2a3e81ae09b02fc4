use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Claims segment is not valid base64url: {source} {location}")]
    ClaimsEncoding {
        #[source]
        source: base64::DecodeError,
        location: ErrorLocation,
    },

    #[error("Claims segment is not valid JSON: {source} {location}")]
    ClaimsJson {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Creates MalformedToken error at caller location.
    #[track_caller]
    pub fn malformed_token(message: impl Into<String>) -> Self {
        Self::MalformedToken {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ClaimsEncoding error at caller location.
    #[track_caller]
    pub fn claims_encoding(source: base64::DecodeError) -> Self {
        Self::ClaimsEncoding {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates ClaimsJson error at caller location.
    #[track_caller]
    pub fn claims_json(source: serde_json::Error) -> Self {
        Self::ClaimsJson {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
