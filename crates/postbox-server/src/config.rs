use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Process configuration, read from the environment once at startup.
///
/// Variables and defaults:
/// - `POSTBOX_HOST` (0.0.0.0), `POSTBOX_PORT` (3000)
/// - `POSTBOX_DB_HOST` (localhost), `POSTBOX_DB_PORT` (5432)
/// - `POSTBOX_DB_USER` (postbox), `POSTBOX_DB_PASSWORD` (empty),
///   `POSTBOX_DB_NAME` (postbox)
/// - `POSTBOX_DB_SSLMODE` (prefer; also disable | require)
/// - `POSTBOX_DB_MAX_CONNECTIONS` (10)
/// - `POSTBOX_ALLOWED_ORIGINS` (empty; comma-separated CORS allow-list)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_sslmode: PgSslMode,
    pub db_max_connections: u32,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("POSTBOX_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("POSTBOX_PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()?;

        let db_host = std::env::var("POSTBOX_DB_HOST").unwrap_or_else(|_| "localhost".into());
        let db_port: u16 = std::env::var("POSTBOX_DB_PORT")
            .unwrap_or_else(|_| "5432".into())
            .parse()?;
        let db_user = std::env::var("POSTBOX_DB_USER").unwrap_or_else(|_| "postbox".into());
        let db_password = std::env::var("POSTBOX_DB_PASSWORD").unwrap_or_default();
        let db_name = std::env::var("POSTBOX_DB_NAME").unwrap_or_else(|_| "postbox".into());
        let db_sslmode = parse_sslmode(
            &std::env::var("POSTBOX_DB_SSLMODE").unwrap_or_else(|_| "prefer".into()),
        )?;
        let db_max_connections: u32 = std::env::var("POSTBOX_DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()?;

        let allowed_origins =
            parse_origins(&std::env::var("POSTBOX_ALLOWED_ORIGINS").unwrap_or_default());

        Ok(Self {
            host,
            port,
            db_host,
            db_port,
            db_user,
            db_password,
            db_name,
            db_sslmode,
            db_max_connections,
            allowed_origins,
        })
    }

    /// Connection options for the pool. The rest of the process never reads
    /// the database environment itself — it only sees the pool built from
    /// these options.
    pub fn pg_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .database(&self.db_name)
            .ssl_mode(self.db_sslmode);
        if !self.db_password.is_empty() {
            options = options.password(&self.db_password);
        }
        options
    }
}

/// `require` encrypts the connection without verifying the server
/// certificate, which is what managed cloud databases usually expect.
fn parse_sslmode(value: &str) -> anyhow::Result<PgSslMode> {
    match value {
        "disable" => Ok(PgSslMode::Disable),
        "prefer" => Ok(PgSslMode::Prefer),
        "require" => Ok(PgSslMode::Require),
        other => anyhow::bail!(
            "Invalid POSTBOX_DB_SSLMODE: {}. Must be 'disable', 'prefer' or 'require'",
            other
        ),
    }
}

/// Comma-separated allow-list; empty input means no cross-origin callers.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
