//! Server configuration loaded from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `HOST` | `0.0.0.0` | Bind host |
//! | `PORT` | `3000` | Listening port |
//! | `DATABASE_URL` | unset | `PostgreSQL` URL; unset selects the in-memory store |
//! | `DATABASE_MAX_CONNECTIONS` | `10` | Pool size |
//! | `DATABASE_CONNECT_TIMEOUT_SECS` | `5` | Wait for a pooled connection |
//! | `DATABASE_IDLE_TIMEOUT_SECS` | `300` | Close connections idle this long |
//! | `TEMPLATES_DIR` | unset | Load view templates from disk instead of the built-in set |
//! | `PUBLIC_DIR` | this crate's `public/` | Directory served under `/public` |
//! | `LOG_FORMAT` | `text` | `json` switches to structured JSON log lines |

use std::str::FromStr;
use std::time::Duration;

/// The stylesheet directory shipped with this crate, resolved at build
/// time so the binary finds it from any working directory.
pub const DEFAULT_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// Errors that can occur while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {name}: {message}")]
    Invalid {
        /// The environment variable name.
        name: &'static str,
        /// Description of the parse failure.
        message: String,
    },
}

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// `PostgreSQL` connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub max_connections: u32,
    /// How long to wait for a pooled database connection.
    pub connect_timeout: Duration,
    /// How long an unused database connection stays open.
    pub idle_timeout: Duration,
    /// Directory to load view templates from, if overriding the built-ins.
    pub templates_dir: Option<String>,
    /// Directory of static assets served under `/public`.
    pub public_dir: String,
    /// Emit JSON log lines instead of human-readable text.
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 3000,
            database_url: None,
            max_connections: 10,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(300),
            templates_dir: None,
            public_dir: String::from(DEFAULT_PUBLIC_DIR),
            json_logs: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a numeric variable is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = parse_var("PORT", get("PORT"))?.unwrap_or(defaults.port);
        let max_connections = parse_var(
            "DATABASE_MAX_CONNECTIONS",
            get("DATABASE_MAX_CONNECTIONS"),
        )?
        .unwrap_or(defaults.max_connections);
        let connect_timeout = parse_var(
            "DATABASE_CONNECT_TIMEOUT_SECS",
            get("DATABASE_CONNECT_TIMEOUT_SECS"),
        )?
        .map_or(defaults.connect_timeout, Duration::from_secs);
        let idle_timeout = parse_var(
            "DATABASE_IDLE_TIMEOUT_SECS",
            get("DATABASE_IDLE_TIMEOUT_SECS"),
        )?
        .map_or(defaults.idle_timeout, Duration::from_secs);

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            database_url: get("DATABASE_URL"),
            max_connections,
            connect_timeout,
            idle_timeout,
            templates_dir: get("TEMPLATES_DIR"),
            public_dir: get("PUBLIC_DIR").unwrap_or(defaults.public_dir),
            json_logs: get("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        })
    }

    /// The `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse an optional variable, naming it in the error.
fn parse_var<T>(name: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map(|raw| {
        raw.trim().parse().map_err(|e| ConfigError::Invalid {
            name,
            message: format!("{raw:?}: {e}"),
        })
    })
    .transpose()
}
