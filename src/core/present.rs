//! Human-readable reports.
//!
//! Renders a [`ConfigRecord`] or the live environment to any writer. Every
//! value passes through the classifier and, when sensitive, the masking
//! engine, unless the caller explicitly asks for [`Visibility::Revealed`].

use std::io::Write;

use crate::core::environ::Environment;
use crate::core::mask::mask;
use crate::core::schema::{ConfigRecord, Group, SchemaField, SCHEMA};
use crate::error::Result;

/// Whether sensitive values are masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Masked,
    Revealed,
}

impl Visibility {
    pub fn from_reveal(reveal: bool) -> Self {
        if reveal {
            Visibility::Revealed
        } else {
            Visibility::Masked
        }
    }

    /// Apply the policy to one value.
    pub fn apply(self, value: &str, sensitive: bool) -> String {
        match self {
            Visibility::Masked if sensitive => mask(value),
            _ => value.to_string(),
        }
    }
}

/// Write the typed record, grouped in presentation order.
///
/// Every schema field gets a line, including empty ones.
pub fn render_record<W: Write + ?Sized>(
    out: &mut W,
    record: &ConfigRecord,
    visibility: Visibility,
) -> Result<()> {
    for group in Group::ALL {
        writeln!(out, "\n{}:", group.title())?;
        for field in fields_in(group) {
            let value = visibility.apply(&field.value(record), field.is_sensitive());
            writeln!(out, "  {}: {}", field.key, value)?;
        }
    }
    Ok(())
}

/// Write the allowlisted variables currently set in `env`.
///
/// Unset and empty variables are skipped.
pub fn render_environment<W, E>(out: &mut W, env: &E, visibility: Visibility) -> Result<()>
where
    W: Write + ?Sized,
    E: Environment + ?Sized,
{
    for field in SCHEMA {
        let Some(value) = env.get(field.key).filter(|v| !v.is_empty()) else {
            continue;
        };
        writeln!(
            out,
            "  {}={}",
            field.key,
            visibility.apply(&value, field.is_sensitive())
        )?;
    }
    Ok(())
}

/// Connection parameters for the usage example line.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub struct Dsn {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub name: String,
}

impl Dsn {
    pub fn from_record(record: &ConfigRecord) -> Self {
        let db = &record.database;
        Self {
            user: db.user.clone(),
            password: db.password.clone(),
            host: db.host.clone(),
            port: port_text(db.port),
            name: db.name.clone(),
        }
    }

    /// Read the same parameters back from exported variables.
    pub fn from_environment<E: Environment + ?Sized>(env: &E) -> Self {
        let var = |name: &str| env.get(name).unwrap_or_default();
        Self {
            user: var("DB_USER"),
            password: var("DB_PASSWORD"),
            host: var("DB_HOST"),
            port: var("DB_PORT"),
            name: var("DB_NAME"),
        }
    }
}

/// Write a PostgreSQL DSN built from the database settings.
///
/// The password is always treated as sensitive.
pub fn render_dsn<W: Write + ?Sized>(out: &mut W, dsn: &Dsn, visibility: Visibility) -> Result<()> {
    writeln!(
        out,
        "  Database DSN: postgresql://{}:{}@{}:{}/{}",
        dsn.user,
        visibility.apply(&dsn.password, true),
        dsn.host,
        dsn.port,
        dsn.name
    )?;
    Ok(())
}

/// Cache parameters for the Redis usage line.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub struct RedisUrl {
    pub username: String,
    pub password: String,
    pub addr: String,
    pub port: String,
    pub db: String,
}

impl RedisUrl {
    pub fn from_record(record: &ConfigRecord) -> Self {
        let cache = &record.cache;
        Self {
            username: cache.username.clone(),
            password: cache.password.clone(),
            addr: cache.addr.clone(),
            port: port_text(cache.port),
            db: cache.db.to_string(),
        }
    }

    /// Read the same parameters back from exported variables.
    ///
    /// An unset `REDIS_DB` reads as database 0.
    pub fn from_environment<E: Environment + ?Sized>(env: &E) -> Self {
        let var = |name: &str| env.get(name).unwrap_or_default();
        let db = var("REDIS_DB");
        Self {
            username: var("REDIS_USERNAME"),
            password: var("REDIS_PASSWORD"),
            addr: var("REDIS_ADDR"),
            port: var("REDIS_PORT"),
            db: if db.is_empty() { "0".to_string() } else { db },
        }
    }

    /// Whether a cache address is known at all.
    pub fn is_configured(&self) -> bool {
        !self.addr.is_empty()
    }
}

/// Write a Redis connection URL built from the cache settings.
///
/// The password is always treated as sensitive.
pub fn render_redis_url<W: Write + ?Sized>(
    out: &mut W,
    url: &RedisUrl,
    visibility: Visibility,
) -> Result<()> {
    writeln!(
        out,
        "  Redis URL: redis://{}:{}@{}:{}/{}",
        url.username,
        visibility.apply(&url.password, true),
        url.addr,
        url.port,
        url.db
    )?;
    Ok(())
}

/// Port 0 means unset and renders empty.
fn port_text(port: u16) -> String {
    if port == 0 {
        String::new()
    } else {
        port.to_string()
    }
}

fn fields_in(group: Group) -> impl Iterator<Item = &'static SchemaField> {
    SCHEMA.iter().filter(move |f| f.group == group)
}
