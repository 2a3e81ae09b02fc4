use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors raised by session storage backends.
///
/// None of these are fatal to the session manager: a failing backend
/// degrades to "session not persisted here" and the failure is logged
/// and reported, never raised to the manager's callers.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read session record at {path}: {source} {location}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to write session record at {path}: {source} {location}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to delete session record at {path}: {source} {location}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to create directory at {path}: {source} {location}")]
    DirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Storage backend unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Whether this error is recoverable via retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Read { .. } | Self::Write { .. } | Self::Delete { .. } | Self::AtomicRename { .. }
        )
    }

    /// Creates Read error at caller location.
    #[track_caller]
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        Self::Read {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Write error at caller location.
    #[track_caller]
    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        Self::Write {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Delete error at caller location.
    #[track_caller]
    pub fn delete(path: PathBuf, source: std::io::Error) -> Self {
        Self::Delete {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates DirCreation error at caller location.
    #[track_caller]
    pub fn dir_creation(path: PathBuf, source: std::io::Error) -> Self {
        Self::DirCreation {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Unavailable error at caller location.
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
