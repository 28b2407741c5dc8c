//! Show command.
//!
//! Decrypts a document into the typed record and prints it masked.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::{output, Context};
use crate::core::present::{render_dsn, render_record, render_redis_url, Dsn, RedisUrl, Visibility};
use crate::error::Result;

/// Print the typed configuration of a document.
pub fn execute(ctx: &Context, file: Option<PathBuf>, reveal: bool) -> Result<()> {
    let file = ctx.file(file);
    let record = ctx.loader().load_record(&file)?;
    let visibility = Visibility::from_reveal(reveal);

    if reveal {
        output::warn("sensitive values are shown in clear text");
    }

    output::success(&format!("decrypted {}", output::path(&file)));
    output::rule();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render_record(&mut out, &record, visibility)?;
    out.flush()?;
    drop(out);

    output::section("Usage");
    let mut out = stdout.lock();
    render_dsn(&mut out, &Dsn::from_record(&record), visibility)?;
    let redis = RedisUrl::from_record(&record);
    if redis.is_configured() {
        render_redis_url(&mut out, &redis, visibility)?;
    }
    out.flush()?;

    Ok(())
}
