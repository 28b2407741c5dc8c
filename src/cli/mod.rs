//! Command-line interface.

pub mod completions;
pub mod env;
pub mod output;
pub mod run;
pub mod show;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::decrypt::ExternalCommand;
use crate::core::loader::Loader;
use crate::error::Result;

/// sopsenv - Load sops-encrypted configuration with masked output.
#[derive(Parser)]
#[command(
    name = "sopsenv",
    about = "Load sops-encrypted configuration into a typed record or the environment",
    version
)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file (default: ./.sopsenv.toml)
    #[arg(long, global = true, env = "SOPSENV_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Decrypt a document and print the typed configuration
    Show {
        /// Encrypted document (default from config)
        file: Option<PathBuf>,
        /// Print sensitive values in clear text
        #[arg(long)]
        reveal: bool,
    },

    /// Decrypt a document into the environment and print the known variables
    Env {
        /// Encrypted document (default from config)
        file: Option<PathBuf>,
        /// Print sensitive values in clear text
        #[arg(long)]
        reveal: bool,
    },

    /// Run a command with the decrypted document in its environment
    Run {
        /// Encrypted document (default from config)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Settings shared by the load commands.
pub struct Context {
    pub config: Config,
}

impl Context {
    /// Read the config file given on the command line, or the default one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is unreadable or invalid.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(Self { config })
    }

    /// The document to load: the explicit one, else the configured default.
    pub fn file(&self, file: Option<PathBuf>) -> PathBuf {
        file.unwrap_or_else(|| self.config.load.file.clone())
    }

    pub fn loader(&self) -> Loader<ExternalCommand> {
        Loader::new(self.config.decryptor()).with_format(self.config.load.format)
    }
}

/// Execute a command.
pub fn execute(command: Command, config_path: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let ctx = || Context::load(config_path.as_deref());

    match command {
        Show { file, reveal } => show::execute(&ctx()?, file, reveal),
        Env { file, reveal } => env::execute(&ctx()?, file, reveal),
        Run { file, command } => run::execute(&ctx()?, file, &command),
        Completions { shell } => completions::execute(shell),
    }
}
