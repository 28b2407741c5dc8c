//! Environment export.
//!
//! Copies parsed key/value pairs into an [`Environment`]. The real provider,
//! [`ProcessEnvironment`], is the process-wide variable table: values set
//! here stay visible to the rest of the process and to child processes until
//! exit, and nothing removes them. [`MemoryEnvironment`] is an isolated
//! stand-in with the same validation rules.
//!
//! Export is not transactional. Assignments made before a failure stay in
//! place.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::core::document::RawEntry;
use crate::core::schema::SCHEMA;
use crate::core::validation::validate_assignment;
use crate::error::{Error, Result};

/// Read/write access to an environment variable table.
pub trait Environment {
    /// Current value of `name`, if set and valid Unicode.
    fn get(&self, name: &str) -> Option<String>;

    /// Set `name` to `value`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `Error::EnvironmentWriteFailed` if the assignment is rejected.
    fn set(&mut self, name: &str, value: &str) -> Result<()>;
}

/// The process-wide environment table.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        check(name, value)?;
        std::env::set_var(name, value);
        Ok(())
    }
}

/// An in-memory environment table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnvironment {
    vars: BTreeMap<String, String>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for MemoryEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        check(name, value)?;
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

fn check(name: &str, value: &str) -> Result<()> {
    validate_assignment(name, value).map_err(|reason| Error::EnvironmentWriteFailed {
        name: name.to_string(),
        reason,
    })
}

/// Export parsed entries in document order.
///
/// Keys and values are trimmed; a later duplicate key overwrites an earlier
/// one. Returns the number of assignments made.
///
/// # Errors
///
/// Stops at the first rejected assignment with
/// `Error::EnvironmentWriteFailed`.
pub fn export_all<E: Environment + ?Sized>(entries: &[RawEntry], env: &mut E) -> Result<usize> {
    let mut count = 0;
    for entry in entries {
        let key = entry.key.trim();
        trace!(key, "exporting");
        env.set(key, entry.value.trim())?;
        count += 1;
    }
    debug!(count, "exported entries to environment");
    Ok(count)
}

/// Export nested entries under their schema names.
///
/// For each schema field whose dotted path appears in `entries`, sets the
/// flat key (`storage.psql.host` also becomes `DB_HOST`). A flat key the
/// document already carries is left alone. Returns the number of assignments
/// made.
///
/// # Errors
///
/// Stops at the first rejected assignment with
/// `Error::EnvironmentWriteFailed`.
pub fn export_schema_keys<E: Environment + ?Sized>(
    entries: &[RawEntry],
    env: &mut E,
) -> Result<usize> {
    let mut count = 0;
    for field in SCHEMA {
        let Some(path) = field.path else {
            continue;
        };
        if entries.iter().any(|e| e.key.trim() == field.key) {
            continue;
        }
        let Some(entry) = entries.iter().find(|e| e.key.trim() == path) else {
            continue;
        };
        trace!(key = field.key, path, "exporting under schema name");
        env.set(field.key, entry.value.trim())?;
        count += 1;
    }
    debug!(count, "exported nested entries under schema names");
    Ok(count)
}

/// Export raw `KEY=VALUE` lines.
///
/// Lenient counterpart of the dotenv parser: blank lines, `#` comments and
/// lines without `=` are skipped rather than rejected. Quotes are kept
/// verbatim. Returns the number of assignments made.
///
/// # Errors
///
/// Stops at the first rejected assignment with
/// `Error::EnvironmentWriteFailed`.
pub fn export_lines<E: Environment + ?Sized>(text: &str, env: &mut E) -> Result<usize> {
    let mut count = 0;
    let mut skipped = 0;

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            skipped += 1;
            continue;
        };

        let key = key.trim();
        trace!(key, "exporting");
        env.set(key, value.trim())?;
        count += 1;
    }

    debug!(count, skipped, "exported lines to environment");
    Ok(count)
}
