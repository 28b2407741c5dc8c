//! Error types for sopsenv.
//!
//! Every variant carries enough context (operation, key name, cause) to be
//! logged safely. None of them ever embeds a decrypted value.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// The external decryptor failed or produced unusable output.
    #[error("failed to decrypt {path}: {reason}")]
    DecryptionFailed { path: String, reason: String },

    /// The decrypted plaintext is not a valid document.
    #[error("failed to parse decrypted document at line {line}: {reason}")]
    ParseFailed { line: usize, reason: String },

    /// A value bound to a numeric field could not be converted.
    #[error("malformed value for {key}: expected {expected}")]
    MalformedValue { key: String, expected: &'static str },

    /// The host rejected an environment variable assignment.
    #[error("failed to set environment variable {name:?}: {reason}")]
    EnvironmentWriteFailed { name: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, Error>;
