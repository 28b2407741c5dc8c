//! Configuration file management.
//!
//! Reads the optional `.sopsenv.toml` that selects the decryptor command and
//! the default document. A missing file means defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::core::decrypt::ExternalCommand;
use crate::core::document::Format;
use crate::error::{ConfigError, Result};

/// Tool configuration stored in `.sopsenv.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub decryptor: DecryptorConfig,
    #[serde(default)]
    pub load: LoadConfig,
}

/// `[decryptor]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecryptorConfig {
    /// Program to run, `sops` by default.
    #[serde(default = "default_command")]
    pub command: String,
    /// Arguments placed before the document path.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for DecryptorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
        }
    }
}

/// `[load]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoadConfig {
    /// Document loaded when no path is given on the command line.
    #[serde(default = "default_file")]
    pub file: PathBuf,
    #[serde(default)]
    pub format: Format,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            format: Format::Auto,
        }
    }
}

fn default_command() -> String {
    constants::DEFAULT_DECRYPTOR.to_string()
}

fn default_args() -> Vec<String> {
    constants::DEFAULT_DECRYPTOR_ARGS
        .iter()
        .map(|a| a.to_string())
        .collect()
}

fn default_file() -> PathBuf {
    PathBuf::from(constants::DEFAULT_FILE)
}

impl Config {
    /// Path to the configuration file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.sopsenv.toml` from the current directory, or defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but is unreadable or invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, which must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile`, `ConfigError::Parse` or
    /// `ConfigError::Invalid`.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&contents)?;

        debug!(
            decryptor = %config.decryptor.command,
            file = %config.load.file.display(),
            "config loaded"
        );
        Ok(config)
    }

    /// Parse and validate configuration text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::Invalid`.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.decryptor.command.trim().is_empty() {
            return Err(ConfigError::Invalid("decryptor command is empty".to_string()).into());
        }
        if self.load.file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("load file is empty".to_string()).into());
        }
        Ok(())
    }

    /// The configured decryptor.
    pub fn decryptor(&self) -> ExternalCommand {
        ExternalCommand::new(
            self.decryptor.command.trim(),
            self.decryptor.args.clone(),
        )
    }
}
