//! PostgreSQL settings for the story and session tables.

use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

/// Connection settings read from `POSTGRES_*` variables.
///
/// - `POSTGRES_HOST` (default: "localhost")
/// - `POSTGRES_PORT` (default: 5432)
/// - `POSTGRES_USER` / `POSTGRES_PASSWORD`
/// - `POSTGRES_DATABASE` (default: "quill")
/// - `POSTGRES_MAX_CONNECTIONS`, `POSTGRES_MIN_CONNECTIONS`,
///   `POSTGRES_ACQUIRE_TIMEOUT` (seconds)
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_database")]
    pub database: String,

    /// Upper bound on pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connections kept open while idle
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Seconds to wait for a free connection
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "quill".to_string()
}

fn default_database() -> String {
    "quill".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_acquire_timeout() -> u64 {
    30
}

impl DatabaseConfig {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, envy::Error> {
        Self::from_vars(std::env::vars())
    }

    /// Load settings from an explicit set of variables. A malformed value,
    /// such as a non-numeric port, fails the load.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("POSTGRES_").from_iter(vars)
    }

    /// Connection options for the pool.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            database: default_database(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            acquire_timeout: default_acquire_timeout(),
        }
    }
}
