//! Test fixtures and constants.

/// Config that "decrypts" with `cat`.
pub const CAT_CONFIG: &str = "[decryptor]\ncommand = \"cat\"\nargs = []\n";

/// Config whose decryptor always fails.
pub const FAILING_CONFIG: &str = "[decryptor]\ncommand = \"false\"\nargs = []\n";

/// Password used in the masking assertions.
pub const DB_PASSWORD: &str = "super_secret_password_123";

/// Its masked form.
pub const DB_PASSWORD_MASKED: &str = "su*********************23";

/// Flat document without JWT_SECRET.
pub const SAMPLE_ENV: &str = r#"# Database
DB_HOST=localhost
DB_PORT=5432
DB_NAME=app
DB_USER=app_user
DB_PASSWORD=super_secret_password_123
DB_MAX_CONNECTIONS=20

REDIS_URL=redis://:redis_pw@cache:6379/0
API_KEY=sk_test_4eC39HqLyjWDarjtT1zdp7dc
GOOGLE_CLIENT_ID=1234.apps.googleusercontent.com
GOOGLE_CLIENT_SECRET=GOCSPX-abcdefghijkl
ENVIRONMENT=staging
CUSTOM_SETTING=not-in-schema
"#;

/// Nested document in the storage/jwt layout.
pub const SAMPLE_YAML: &str = r#"storage:
  psql:
    host: db.internal
    port: 5433
    database: orders
    username: orders_svc
    password: yaml_db_password_987
    pg_pool_max_conn: 15
  redis:
    addr: cache.internal
    port: 6380
    username: default
    password: yaml_redis_pw
    db: 3
jwt:
  auth: yaml-jwt-signing-secret
"#;
