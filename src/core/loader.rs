//! Load operations.
//!
//! Chains decryption, parsing, mapping and export. Every step is blocking and
//! any failure aborts the whole load; nothing is retried.

use std::path::Path;

use tracing::debug;

use crate::core::decrypt::Decryptor;
use crate::core::document::{self, Format, RawEntry};
use crate::core::environ::{self, Environment};
use crate::core::mapper;
use crate::core::schema::ConfigRecord;
use crate::error::Result;

/// Loads encrypted documents through a [`Decryptor`].
#[derive(Debug, Clone)]
pub struct Loader<D> {
    decryptor: D,
    format: Format,
}

impl<D: Decryptor> Loader<D> {
    pub fn new(decryptor: D) -> Self {
        Self {
            decryptor,
            format: Format::Auto,
        }
    }

    /// Override the document format instead of guessing from the extension.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Decrypt and parse a document into ordered entries.
    ///
    /// # Errors
    ///
    /// Returns `Error::DecryptionFailed` or `Error::ParseFailed`.
    pub fn load_entries(&self, path: impl AsRef<Path>) -> Result<Vec<RawEntry>> {
        let path = path.as_ref();
        let format = self.format.resolve(path);

        let plaintext = self.decryptor.decrypt(path)?;
        let entries = document::parse(plaintext.as_text(path)?, format)?;

        debug!(
            path = %path.display(),
            decryptor = self.decryptor.name(),
            entries = entries.len(),
            "loaded document"
        );
        Ok(entries)
    }

    /// Decrypt, parse and map a document into a typed record.
    ///
    /// # Errors
    ///
    /// Returns `Error::DecryptionFailed`, `Error::ParseFailed` or
    /// `Error::MalformedValue`. No record is produced on failure.
    pub fn load_record(&self, path: impl AsRef<Path>) -> Result<ConfigRecord> {
        let entries = self.load_entries(path)?;
        mapper::map(&entries)
    }

    /// Decrypt a document and export every pair into `env`.
    ///
    /// Dotenv documents are exported line by line and malformed lines are
    /// skipped. Nested documents are parsed strictly; their flattened entries
    /// are exported under the dotted paths and, for schema fields, under the
    /// flat names as well. Returns the number of assignments.
    ///
    /// # Errors
    ///
    /// Returns `Error::DecryptionFailed`, `Error::ParseFailed` (nested only)
    /// or `Error::EnvironmentWriteFailed`. Assignments made before an export
    /// failure are not rolled back.
    pub fn load_into_environment<E: Environment + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        env: &mut E,
    ) -> Result<usize> {
        let path = path.as_ref();
        let format = self.format.resolve(path);
        let plaintext = self.decryptor.decrypt(path)?;
        let text = plaintext.as_text(path)?;

        match format {
            Format::Yaml => {
                let entries = document::parse_yaml(text)?;
                let count = environ::export_all(&entries, env)?;
                Ok(count + environ::export_schema_keys(&entries, env)?)
            }
            Format::Dotenv | Format::Auto => environ::export_lines(text, env),
        }
    }
}
