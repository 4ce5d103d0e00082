//! Application configuration for the Quill dashboard server.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Environment variables are prefixed with `QUILL_`:
/// - `QUILL_HOST`: Server bind address (default: "0.0.0.0")
/// - `QUILL_PORT`: Server port (default: 3000)
/// - `QUILL_DEBUG`: Enable debug mode (default: false)
/// - `QUILL_SERVER_NAME`: Server name for identification
/// - `QUILL_REDIS_URL`: Key-value store URL (optional, in-memory store when unset)
/// - `QUILL_SESSION_COOKIE_NAME`: Cookie carrying the session token
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable debug mode
    #[serde(default)]
    pub debug: bool,

    /// Server name for identification
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Redis URL (optional)
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Name of the cookie holding the session token
    #[serde(default = "default_session_cookie_name")]
    pub session_cookie_name: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_server_name() -> String {
    "quill-dashboard".to_string()
}

fn default_session_cookie_name() -> String {
    "next-auth.session-token".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `QUILL_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables.
    ///
    /// A malformed value fails the whole load; nothing falls back to defaults.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("QUILL_").from_iter(vars)
    }

    /// Get the server bind address as a string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
            server_name: default_server_name(),
            redis_url: None,
            session_cookie_name: default_session_cookie_name(),
        }
    }
}
