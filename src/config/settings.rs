//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_MAX_CONNECTIONS, DEFAULT_POSTGRES_DB, DEFAULT_POSTGRES_HOST,
    DEFAULT_POSTGRES_PASSWORD, DEFAULT_POSTGRES_PORT, DEFAULT_POSTGRES_USER,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server_host: String,
    pub server_port: u16,
}

/// Database connection settings
#[derive(Clone)]
pub struct DatabaseConfig {
    url: String,
    pub max_connections: u32,
    pub log_sql: bool,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("log_sql", &self.log_sql)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database: DatabaseConfig::from_env(),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl DatabaseConfig {
    /// Read `DATABASE_URL`, or compose a PostgreSQL URL from the
    /// `POSTGRES_*` variables.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            postgres_url(
                &env::var("POSTGRES_USER").unwrap_or_else(|_| DEFAULT_POSTGRES_USER.to_string()),
                &env::var("POSTGRES_PASSWORD")
                    .unwrap_or_else(|_| DEFAULT_POSTGRES_PASSWORD.to_string()),
                &env::var("POSTGRES_HOST").unwrap_or_else(|_| DEFAULT_POSTGRES_HOST.to_string()),
                parse_var("POSTGRES_PORT").unwrap_or(DEFAULT_POSTGRES_PORT),
                &env::var("POSTGRES_DB").unwrap_or_else(|_| DEFAULT_POSTGRES_DB.to_string()),
            )
        });

        let max_connections = pool_size(
            &url,
            parse_var("DATABASE_MAX_CONNECTIONS").unwrap_or(DEFAULT_MAX_CONNECTIONS),
        );

        Self {
            url,
            max_connections,
            log_sql: parse_var("DATABASE_LOG_SQL").unwrap_or(false),
        }
    }

    /// Settings for an explicit connection URL with default pool options.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let max_connections = pool_size(&url, DEFAULT_MAX_CONNECTIONS);

        Self {
            url,
            max_connections,
            log_sql: false,
        }
    }

    /// Override the pool size.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Connection URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

fn postgres_url(user: &str, password: &str, host: &str, port: u16, database: &str) -> String {
    format!("postgres://{user}:{password}@{host}:{port}/{database}")
}

/// An in-memory SQLite database lives inside a single connection, so its pool
/// is pinned to one.
fn pool_size(url: &str, requested: u32) -> u32 {
    if is_sqlite_memory(url) {
        1
    } else {
        requested
    }
}

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite::memory:")
        || (url.starts_with("sqlite:") && url.contains("mode=memory"))
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
