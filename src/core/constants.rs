//! Constants used throughout sopsenv.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.sopsenv.toml).
pub const CONFIG_FILE: &str = ".sopsenv.toml";

/// Encrypted document loaded when no file is given.
pub const DEFAULT_FILE: &str = "config.sops.env";

/// Default external decryptor program.
pub const DEFAULT_DECRYPTOR: &str = "sops";

/// Default decryptor arguments; the document path is appended.
pub const DEFAULT_DECRYPTOR_ARGS: &[&str] = &["--decrypt"];

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "SOPSENV_LOG";

/// Character substituted for hidden characters of a sensitive value.
pub const MASK_CHAR: char = '*';

/// Number of characters kept verbatim at each end of a masked value.
pub const MASK_KEEP: usize = 2;

/// Name fragments that mark a field as sensitive (matched case-insensitively).
pub const SENSITIVE_MARKERS: &[&str] = &[
    "PASSWORD",
    "SECRET",
    "KEY",
    "TOKEN",
    "CREDENTIAL",
    "PRIVATE",
];

/// File extensions treated as nested (YAML/JSON) documents.
pub const NESTED_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];
