//! All error types for the stringlift crate.
//!
//! These are returned from all fallible operations (resource-file appends,
//! document edits, validation).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid locale `{0}`")]
    InvalidLocale(String),

    #[error("malformed resource file {path}: {reason}")]
    MalformedResource { path: String, reason: String },

    #[error("key `{key}` already present in {path}")]
    KeyCollision { key: String, path: String },

    #[error("invalid edit: {0}")]
    InvalidEdit(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new malformed-resource error for the given path.
    pub fn malformed_resource(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedResource {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}
