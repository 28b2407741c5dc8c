//! sopsenv - Load sops-encrypted configuration with masked output.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sopsenv::cli::output;
use sopsenv::cli::{execute, Cli};
use sopsenv::core::constants::LOG_ENV;
use sopsenv::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sopsenv=debug")
        } else {
            EnvFilter::new("sopsenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.config) {
        let suggestion = match &e {
            Error::DecryptionFailed { reason, .. } if reason.contains("not found") => {
                Some("install sops or set [decryptor] command in .sopsenv.toml")
            }
            Error::DecryptionFailed { .. } => {
                Some("check the file path and that your sops keys are available")
            }
            Error::ParseFailed { .. } => {
                Some("set [load] format in .sopsenv.toml if the extension is misleading")
            }
            Error::Config(ConfigError::Parse(_)) => Some("see the [decryptor] and [load] sections"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
