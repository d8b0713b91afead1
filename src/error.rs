//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a string is not a valid preference value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("'{0}' is not a theme mode (expected 'light' or 'dark')")]
    InvalidMode(String),
    #[error("'{0}' is not an accent color")]
    InvalidColor(String),
}

/// Error returned by a [`PreferenceStore`](crate::PreferenceStore).
///
/// The manager never surfaces these; they are logged and the session
/// carries on with its in-memory state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read preferences: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write preferences: {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse preferences")]
    Parse(#[from] serde_json::Error),
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}

/// Error returned when loading a [`PreferenceConfig`](crate::PreferenceConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
}
