//! Error types.
//!
//! Each layer has its own error enum; [`Error`] wraps them so callers can
//! match on the failing step. Messages name the field and the step that
//! failed and never include key bytes or plaintext.

use thiserror::Error;

use crate::core::codec::{DecodeIssue, Field};

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Seal(#[from] SealError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Base64 decoding failures.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("decode failed for {field}: {issue}")]
    Decode {
        field: Field,
        issue: DecodeIssue,
        #[source]
        source: base64::DecodeError,
    },
}

/// Public key shape failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    #[error("invalid public_key_base64: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Sealing failures.
#[derive(Error, Debug)]
pub enum SealError {
    #[error("seal failed: primitive rejected input")]
    Rejected,

    #[error("seal failed: entropy source unavailable: {0}")]
    Entropy(String),
}

/// Configuration file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: {0} not found")]
    NotInitialized(String),

    #[error("already initialized: {0} exists")]
    AlreadyInitialized(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// State file failures.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("failed to read state: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write state: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("failed to parse state: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize state: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("corrupt state for item '{name}': {source}")]
    Corrupt {
        name: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{field} does not match {derived_from}")]
    Mismatch {
        field: &'static str,
        derived_from: &'static str,
    },

    #[error("invalid updated_at: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("item not found in state: {0}")]
    NotFound(String),

    #[error("failed to reconcile item '{name}': {source}")]
    Reconcile {
        name: String,
        #[source]
        source: Box<Error>,
    },
}

/// Input validation failures.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("item name cannot be empty")]
    EmptyName,

    #[error("invalid item name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
