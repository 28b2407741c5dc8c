//! Run command.
//!
//! Executes a command with a decrypted document exported into the
//! environment it inherits.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::Context;
use crate::core::environ::ProcessEnvironment;
use crate::error::{Error, Result};

/// Run a command with the document's variables in its environment.
pub fn execute(ctx: &Context, file: Option<PathBuf>, command: &[String]) -> Result<()> {
    let exit_code = run_with_document(ctx, file, command)?;
    std::process::exit(exit_code);
}

fn run_with_document(ctx: &Context, file: Option<PathBuf>, command: &[String]) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        return Err(Error::Other("no command specified".to_string()));
    };

    let file = ctx.file(file);
    let count = ctx
        .loader()
        .load_into_environment(&file, &mut ProcessEnvironment)?;
    debug!(count, program = %program, "running with exported environment");

    // The child inherits the process environment, exported values included.
    let status = std::process::Command::new(program).args(args).status()?;
    // Killed by a signal: no code, report 1.
    Ok(status.code().unwrap_or(1))
}
