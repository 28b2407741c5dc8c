//! Field mapping from parsed entries onto [`ConfigRecord`].

use std::collections::HashMap;

use tracing::debug;

use crate::core::document::RawEntry;
use crate::core::schema::{ConfigRecord, Slot, SCHEMA};
use crate::error::{Error, Result};

/// Build a typed record from parsed entries.
///
/// Each schema field is looked up by its flat key, then by its nested path.
/// Absent fields keep their zero value; unrecognized entries are ignored.
/// A numeric field whose value is blank counts as absent.
///
/// # Errors
///
/// Returns `Error::MalformedValue` if a numeric field holds text that does
/// not convert. The error names the key, never the value.
pub fn map(entries: &[RawEntry]) -> Result<ConfigRecord> {
    let lookup: HashMap<&str, &str> = entries
        .iter()
        .map(|e| (e.key.as_str(), e.value.as_str()))
        .collect();

    let mut record = ConfigRecord::default();
    let mut assigned = 0usize;

    for field in SCHEMA {
        let value = lookup
            .get(field.key)
            .or_else(|| field.path.and_then(|path| lookup.get(path)));

        let Some(value) = value else {
            continue;
        };

        match field.slot {
            Slot::Text { set, .. } => set(&mut record, (*value).to_string()),
            Slot::Port { .. } | Slot::Count { .. } if value.trim().is_empty() => continue,
            Slot::Port { set, .. } => {
                let port = value.trim().parse::<u16>().map_err(|_| Error::MalformedValue {
                    key: field.key.to_string(),
                    expected: "a port number (0-65535)",
                })?;
                set(&mut record, port);
            }
            Slot::Count { set, .. } => {
                let count = value.trim().parse::<u32>().map_err(|_| Error::MalformedValue {
                    key: field.key.to_string(),
                    expected: "a non-negative integer",
                })?;
                set(&mut record, count);
            }
        }
        assigned += 1;
    }

    debug!(
        entries = entries.len(),
        assigned,
        ignored = entries.len().saturating_sub(assigned),
        "mapped entries onto schema"
    );

    Ok(record)
}
