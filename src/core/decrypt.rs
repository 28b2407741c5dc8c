//! Decryption boundary.
//!
//! Decryption itself is delegated to an external program (`sops` by
//! default) that is handed the document path and writes plaintext to
//! stdout. The plaintext is kept in memory only, in a buffer that is wiped
//! when dropped.
//!
//! ## Requirements
//!
//! - The decryptor CLI must be installed and on `PATH`
//! - Whatever keys it needs (age, PGP, cloud KMS) must already be available

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::constants::{DEFAULT_DECRYPTOR, DEFAULT_DECRYPTOR_ARGS};
use crate::error::{Error, Result};

/// Decrypted document bytes, wiped on drop.
pub struct Plaintext(Zeroizing<Vec<u8>>);

impl Plaintext {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View the plaintext as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `Error::DecryptionFailed` for `path` if the bytes are not UTF-8.
    pub fn as_text(&self, path: &Path) -> Result<&str> {
        std::str::from_utf8(&self.0).map_err(|e| Error::DecryptionFailed {
            path: path.display().to_string(),
            reason: format!("decrypted output is not UTF-8 (byte {})", e.valid_up_to()),
        })
    }
}

impl std::fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Plaintext({} bytes)", self.0.len())
    }
}

/// Something that turns an encrypted file into plaintext.
pub trait Decryptor {
    /// Decrypt the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DecryptionFailed` on any failure.
    fn decrypt(&self, path: &Path) -> Result<Plaintext>;

    /// Backend name for logs and messages.
    fn name(&self) -> &str;
}

impl<D: Decryptor + ?Sized> Decryptor for &D {
    fn decrypt(&self, path: &Path) -> Result<Plaintext> {
        (**self).decrypt(path)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Decryptor backed by an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
}

impl ExternalCommand {
    /// `program args... <path>`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `sops --decrypt <path>`.
    pub fn sops() -> Self {
        Self::new(
            DEFAULT_DECRYPTOR,
            DEFAULT_DECRYPTOR_ARGS.iter().map(|a| a.to_string()).collect(),
        )
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Check the program can be found before spawning it.
    fn check_program(&self, path: &Path) -> Result<()> {
        which::which(&self.program).map_err(|_| Error::DecryptionFailed {
            path: path.display().to_string(),
            reason: format!(
                "{} CLI not found. Install it or set [decryptor] command in .sopsenv.toml",
                self.program
            ),
        })?;
        Ok(())
    }
}

impl Default for ExternalCommand {
    fn default() -> Self {
        Self::sops()
    }
}

impl Decryptor for ExternalCommand {
    fn decrypt(&self, path: &Path) -> Result<Plaintext> {
        let shown = path.display().to_string();
        debug!(program = %self.program, path = %shown, "decrypting");

        self.check_program(path)?;

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Error::DecryptionFailed {
                path: shown.clone(),
                reason: format!("failed to spawn {}: {}", self.program, e),
            })?;

        // Wrap before anything else can fail so the bytes are wiped on every path.
        let plaintext = Plaintext::new(output.stdout);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = match output.status.code() {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            };
            return Err(Error::DecryptionFailed {
                path: shown,
                reason: format!("{} failed ({}): {}", self.program, status, stderr.trim()),
            });
        }

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }

    fn name(&self) -> &str {
        &self.program
    }
}
