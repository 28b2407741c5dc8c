//! Decrypted document parsing.
//!
//! Turns plaintext into an ordered list of [`RawEntry`] values. Two syntaxes
//! are understood: flat dotenv lines and nested YAML (JSON parses as YAML).
//! Nested documents are flattened to dotted keys, so
//!
//! ```yaml
//! storage:
//!   psql:
//!     port: 5432
//! ```
//!
//! yields the entry `storage.psql.port = "5432"`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde_yaml::Value;
use tracing::trace;
use zeroize::Zeroize;

use crate::core::constants::NESTED_EXTENSIONS;
use crate::core::validation::validate_key;
use crate::error::{Error, Result};

/// One key/value pair from a decrypted document.
///
/// The value is wiped from memory on drop and never shown by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub key: String,
    pub value: String,
}

impl RawEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Debug for RawEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawEntry")
            .field("key", &self.key)
            .field("value_len", &self.value.len())
            .finish()
    }
}

impl Drop for RawEntry {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Document syntax of a decrypted file.
///
/// Parsed case-insensitively; `env` is accepted for dotenv and `yml` or
/// `json` for yaml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Format {
    /// Pick from the file extension.
    #[default]
    Auto,
    /// Flat `KEY=VALUE` lines.
    Dotenv,
    /// Nested YAML or JSON.
    Yaml,
}

impl Format {
    /// Resolve `Auto` against a path; other formats are returned unchanged.
    pub fn resolve(self, path: &Path) -> Format {
        match self {
            Format::Auto => {
                let nested = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| NESTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                    .unwrap_or(false);
                if nested {
                    Format::Yaml
                } else {
                    Format::Dotenv
                }
            }
            other => other,
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Format::Auto),
            "dotenv" | "env" => Ok(Format::Dotenv),
            "yaml" | "yml" | "json" => Ok(Format::Yaml),
            other => Err(Error::Other(format!(
                "unknown document format '{}' (expected auto, dotenv or yaml)",
                other
            ))),
        }
    }
}

impl TryFrom<String> for Format {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Parse plaintext in the given (resolved) format.
///
/// `Format::Auto` is treated as dotenv; callers resolve it against the file
/// path first.
///
/// # Errors
///
/// Returns `Error::ParseFailed` if the plaintext does not conform.
pub fn parse(text: &str, format: Format) -> Result<Vec<RawEntry>> {
    let entries = match format {
        Format::Yaml => parse_yaml(text)?,
        Format::Dotenv | Format::Auto => parse_dotenv(text)?,
    };
    trace!(entries = entries.len(), ?format, "parsed document");
    Ok(entries)
}

/// Parse dotenv lines.
///
/// Skips empty lines and comments, accepts an `export ` prefix and strips
/// matching quotes. A non-comment line without `=` or with an invalid key is
/// an error. Duplicate keys keep their first position and the last value.
///
/// # Errors
///
/// Returns `Error::ParseFailed` with the 1-based line number.
pub fn parse_dotenv(text: &str) -> Result<Vec<RawEntry>> {
    let mut entries: Vec<RawEntry> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::ParseFailed {
                line: idx + 1,
                reason: "expected KEY=VALUE".to_string(),
            });
        };

        let key = key.trim();
        validate_key(key).map_err(|reason| Error::ParseFailed {
            line: idx + 1,
            reason,
        })?;

        upsert(&mut entries, key.to_string(), parse_env_value(value.trim()));
    }

    Ok(entries)
}

/// Parse a nested YAML/JSON document and flatten it to dotted keys.
///
/// # Errors
///
/// Returns `Error::ParseFailed` if the text is not YAML or its root is not a
/// mapping.
pub fn parse_yaml(text: &str) -> Result<Vec<RawEntry>> {
    let root: Value = serde_yaml::from_str(text).map_err(|e| Error::ParseFailed {
        line: e.location().map(|loc| loc.line()).unwrap_or(0),
        reason: "invalid YAML document".to_string(),
    })?;

    let mut entries = Vec::new();
    match root {
        Value::Mapping(_) => flatten(&root, "", &mut entries)?,
        Value::Null => {}
        _ => {
            return Err(Error::ParseFailed {
                line: 1,
                reason: "document root must be a mapping".to_string(),
            })
        }
    }
    Ok(entries)
}

fn flatten(value: &Value, prefix: &str, out: &mut Vec<RawEntry>) -> Result<()> {
    match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                let segment = scalar_to_string(k).ok_or_else(|| Error::ParseFailed {
                    line: 0,
                    reason: format!("non-scalar key under '{}'", prefix),
                })?;
                flatten(v, &join(prefix, &segment), out)?;
            }
        }
        Value::Sequence(items) => {
            for (i, v) in items.iter().enumerate() {
                flatten(v, &join(prefix, &i.to_string()), out)?;
            }
        }
        Value::Tagged(tagged) => flatten(&tagged.value, prefix, out)?,
        scalar => {
            let value = scalar_to_string(scalar).unwrap_or_default();
            upsert(out, prefix.to_string(), value);
        }
    }
    Ok(())
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}

fn upsert(entries: &mut Vec<RawEntry>, key: String, mut value: String) {
    if let Some(existing) = entries.iter_mut().find(|e| e.key == key) {
        std::mem::swap(&mut existing.value, &mut value);
        value.zeroize();
    } else {
        entries.push(RawEntry { key, value });
    }
}

fn parse_env_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
