//! Configuration schema and typed record.
//!
//! [`SCHEMA`] is the single declaration of every recognized field: its flat
//! key, optional nested path, display group, extra sensitivity and the slot
//! in [`ConfigRecord`] it fills. The mapper, the environment allowlist and
//! the presenter all iterate this table, so a new field is one entry here
//! plus its struct member.

use std::fmt;

use crate::core::classify::is_sensitive;
use crate::core::mask::mask;

/// Display group, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Group {
    Database,
    Cache,
    Secrets,
    OAuth,
    Services,
    Runtime,
    Keys,
}

impl Group {
    /// All groups in presentation order.
    pub const ALL: [Group; 7] = [
        Group::Database,
        Group::Cache,
        Group::Secrets,
        Group::OAuth,
        Group::Services,
        Group::Runtime,
        Group::Keys,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Group::Database => "Database",
            Group::Cache => "Cache",
            Group::Secrets => "Application Secrets",
            Group::OAuth => "OAuth Credentials",
            Group::Services => "External Services",
            Group::Runtime => "Runtime",
            Group::Keys => "Encryption Keys",
        }
    }
}

/// Where a schema field lives in the record, and how its text is converted.
#[derive(Clone, Copy)]
pub enum Slot {
    Text {
        get: fn(&ConfigRecord) -> &str,
        set: fn(&mut ConfigRecord, String),
    },
    Port {
        get: fn(&ConfigRecord) -> u16,
        set: fn(&mut ConfigRecord, u16),
    },
    Count {
        get: fn(&ConfigRecord) -> u32,
        set: fn(&mut ConfigRecord, u32),
    },
}

/// Static metadata for one recognized field.
#[derive(Clone, Copy)]
pub struct SchemaField {
    /// Flat key, also the environment variable name (e.g. `DB_HOST`).
    pub key: &'static str,
    /// Dotted path in nested documents (e.g. `storage.psql.host`).
    pub path: Option<&'static str>,
    pub group: Group,
    /// Forces masking even when the key carries no sensitive marker.
    pub sensitive: bool,
    pub slot: Slot,
}

impl SchemaField {
    /// Whether this field is displayed masked.
    ///
    /// The schema flag can only add masking on top of the name heuristic.
    pub fn is_sensitive(&self) -> bool {
        self.sensitive || is_sensitive(self.key)
    }

    /// The field's value in `record`, rendered as text.
    pub fn value(&self, record: &ConfigRecord) -> String {
        match self.slot {
            Slot::Text { get, .. } => get(record).to_string(),
            Slot::Port { get, .. } => get(record).to_string(),
            Slot::Count { get, .. } => get(record).to_string(),
        }
    }
}

impl fmt::Debug for SchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaField")
            .field("key", &self.key)
            .field("path", &self.path)
            .field("group", &self.group)
            .field("sensitive", &self.is_sensitive())
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Database {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Cache {
    pub url: String,
    pub password: String,
    pub addr: String,
    pub port: u16,
    pub username: String,
    pub db: u32,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    pub jwt_secret: String,
    pub api_key: String,
    pub stripe_secret_key: String,
    pub sendgrid_api_key: String,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct OAuth {
    pub google_client_id: String,
    pub google_client_secret: String,
    pub github_client_id: String,
    pub github_client_secret: String,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Services {
    pub webhook_url: String,
    pub notification_service_url: String,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Runtime {
    pub environment: String,
    pub debug: String,
    pub log_level: String,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Keys {
    pub encryption_key: String,
    pub signing_key: String,
}

/// Typed configuration built from one decrypted document.
///
/// Absent keys leave their field at the zero value. `Debug` output masks
/// sensitive fields.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConfigRecord {
    pub database: Database,
    pub cache: Cache,
    pub secrets: Secrets,
    pub oauth: OAuth,
    pub services: Services,
    pub runtime: Runtime,
    pub keys: Keys,
}

impl fmt::Debug for ConfigRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for field in SCHEMA {
            let value = field.value(self);
            if field.is_sensitive() {
                map.entry(&field.key, &mask(&value));
            } else {
                map.entry(&field.key, &value);
            }
        }
        map.finish()
    }
}

const fn text(
    key: &'static str,
    path: Option<&'static str>,
    group: Group,
    get: fn(&ConfigRecord) -> &str,
    set: fn(&mut ConfigRecord, String),
) -> SchemaField {
    SchemaField {
        key,
        path,
        group,
        sensitive: false,
        slot: Slot::Text { get, set },
    }
}

const fn masked(field: SchemaField) -> SchemaField {
    SchemaField {
        sensitive: true,
        ..field
    }
}

/// Every recognized field, in presentation order.
#[rustfmt::skip]
pub static SCHEMA: &[SchemaField] = &[
    // Database
    text("DB_HOST", Some("storage.psql.host"), Group::Database,
        |r| r.database.host.as_str(), |r, v| r.database.host = v),
    SchemaField {
        key: "DB_PORT",
        path: Some("storage.psql.port"),
        group: Group::Database,
        sensitive: false,
        slot: Slot::Port { get: |r| r.database.port, set: |r, v| r.database.port = v },
    },
    text("DB_NAME", Some("storage.psql.database"), Group::Database,
        |r| r.database.name.as_str(), |r, v| r.database.name = v),
    text("DB_USER", Some("storage.psql.username"), Group::Database,
        |r| r.database.user.as_str(), |r, v| r.database.user = v),
    text("DB_PASSWORD", Some("storage.psql.password"), Group::Database,
        |r| r.database.password.as_str(), |r, v| r.database.password = v),
    SchemaField {
        key: "DB_MAX_CONNECTIONS",
        path: Some("storage.psql.pg_pool_max_conn"),
        group: Group::Database,
        sensitive: false,
        slot: Slot::Count {
            get: |r| r.database.max_connections,
            set: |r, v| r.database.max_connections = v,
        },
    },
    // Cache
    masked(text("REDIS_URL", None, Group::Cache,
        |r| r.cache.url.as_str(), |r, v| r.cache.url = v)),
    text("REDIS_PASSWORD", Some("storage.redis.password"), Group::Cache,
        |r| r.cache.password.as_str(), |r, v| r.cache.password = v),
    text("REDIS_ADDR", Some("storage.redis.addr"), Group::Cache,
        |r| r.cache.addr.as_str(), |r, v| r.cache.addr = v),
    SchemaField {
        key: "REDIS_PORT",
        path: Some("storage.redis.port"),
        group: Group::Cache,
        sensitive: false,
        slot: Slot::Port { get: |r| r.cache.port, set: |r, v| r.cache.port = v },
    },
    text("REDIS_USERNAME", Some("storage.redis.username"), Group::Cache,
        |r| r.cache.username.as_str(), |r, v| r.cache.username = v),
    SchemaField {
        key: "REDIS_DB",
        path: Some("storage.redis.db"),
        group: Group::Cache,
        sensitive: false,
        slot: Slot::Count { get: |r| r.cache.db, set: |r, v| r.cache.db = v },
    },
    // Application secrets
    text("JWT_SECRET", Some("jwt.auth"), Group::Secrets,
        |r| r.secrets.jwt_secret.as_str(), |r, v| r.secrets.jwt_secret = v),
    text("API_KEY", None, Group::Secrets,
        |r| r.secrets.api_key.as_str(), |r, v| r.secrets.api_key = v),
    text("STRIPE_SECRET_KEY", None, Group::Secrets,
        |r| r.secrets.stripe_secret_key.as_str(), |r, v| r.secrets.stripe_secret_key = v),
    text("SENDGRID_API_KEY", None, Group::Secrets,
        |r| r.secrets.sendgrid_api_key.as_str(), |r, v| r.secrets.sendgrid_api_key = v),
    // OAuth
    text("GOOGLE_CLIENT_ID", None, Group::OAuth,
        |r| r.oauth.google_client_id.as_str(), |r, v| r.oauth.google_client_id = v),
    text("GOOGLE_CLIENT_SECRET", None, Group::OAuth,
        |r| r.oauth.google_client_secret.as_str(), |r, v| r.oauth.google_client_secret = v),
    text("GITHUB_CLIENT_ID", None, Group::OAuth,
        |r| r.oauth.github_client_id.as_str(), |r, v| r.oauth.github_client_id = v),
    text("GITHUB_CLIENT_SECRET", None, Group::OAuth,
        |r| r.oauth.github_client_secret.as_str(), |r, v| r.oauth.github_client_secret = v),
    // External services
    text("WEBHOOK_URL", None, Group::Services,
        |r| r.services.webhook_url.as_str(), |r, v| r.services.webhook_url = v),
    text("NOTIFICATION_SERVICE_URL", None, Group::Services,
        |r| r.services.notification_service_url.as_str(),
        |r, v| r.services.notification_service_url = v),
    // Runtime
    text("ENVIRONMENT", None, Group::Runtime,
        |r| r.runtime.environment.as_str(), |r, v| r.runtime.environment = v),
    text("DEBUG", None, Group::Runtime,
        |r| r.runtime.debug.as_str(), |r, v| r.runtime.debug = v),
    text("LOG_LEVEL", None, Group::Runtime,
        |r| r.runtime.log_level.as_str(), |r, v| r.runtime.log_level = v),
    // Encryption keys
    text("ENCRYPTION_KEY", None, Group::Keys,
        |r| r.keys.encryption_key.as_str(), |r, v| r.keys.encryption_key = v),
    text("SIGNING_KEY", None, Group::Keys,
        |r| r.keys.signing_key.as_str(), |r, v| r.keys.signing_key = v),
];

/// Flat keys of every schema field; the environment allowlist.
pub fn allowlist() -> impl Iterator<Item = &'static str> {
    SCHEMA.iter().map(|f| f.key)
}
