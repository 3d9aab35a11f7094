//! Error types for the layers around the builder.
//!
//! The builder itself cannot fail. Errors start at the edges: handing a batch to
//! the OS, reading configuration, and parsing key names or scripts.

use std::io;
use thiserror::Error;

/// Failure while injecting a batch.
#[derive(Debug, Error)]
pub enum InjectError {
    /// The OS accepted only part of the batch (typically blocked by UIPI).
    #[error("injected {sent} of {expected} input records")]
    Partial { sent: usize, expected: usize },

    /// The injection call failed outright; carries the OS error code.
    #[error("input injection failed (os error {0})")]
    Os(u32),

    /// The batch is larger than the injection call can address.
    #[error("batch of {0} records is too large to submit")]
    TooLarge(usize),

    /// No injection backend is available on this platform/build.
    #[error("input injection is not supported on this platform")]
    Unsupported,
}

/// Configuration load/save failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Key name that could not be resolved to a [`VirtualKey`](crate::VirtualKey).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    #[error("empty key name")]
    Empty,

    #[error("unknown key `{0}`")]
    Unknown(String),
}

/// Script load failure.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported script extension `{0}` (expected .toml or .json)")]
    UnknownFormat(String),
}
