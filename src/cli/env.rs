//! Env command.
//!
//! Exports a decrypted document into this process's environment, then prints
//! the known variables as they now read back from it.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::{output, Context};
use crate::core::environ::ProcessEnvironment;
use crate::core::present::{
    render_dsn, render_environment, render_redis_url, Dsn, RedisUrl, Visibility,
};
use crate::error::Result;

/// Export a document to the environment and print the known variables.
pub fn execute(ctx: &Context, file: Option<PathBuf>, reveal: bool) -> Result<()> {
    let file = ctx.file(file);
    let mut env = ProcessEnvironment;
    let count = ctx.loader().load_into_environment(&file, &mut env)?;
    let visibility = Visibility::from_reveal(reveal);

    if reveal {
        output::warn("sensitive values are shown in clear text");
    }

    output::success(&format!(
        "exported {} variables from {}",
        count,
        output::path(&file)
    ));
    output::rule();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_environment(&mut out, &env, visibility)?;
    out.flush()?;
    drop(out);

    output::section("Usage");
    let mut out = stdout.lock();
    render_dsn(&mut out, &Dsn::from_environment(&env), visibility)?;
    let redis = RedisUrl::from_environment(&env);
    if redis.is_configured() {
        render_redis_url(&mut out, &redis, visibility)?;
    }
    out.flush()?;

    Ok(())
}
