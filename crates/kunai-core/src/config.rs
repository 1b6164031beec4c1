use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_LOCK_TIMEOUT, DEFAULT_MAXIMUM_LOCK_TIMEOUT};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub dav: DavConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    SingleUser,
    Proxy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub method: AuthMethod,
    pub proxy: Option<ProxyAuthConfig>,
    pub single_user: Option<SingleUserAuthConfig>,
}

/// The upstream proxy places the authenticated username in `header`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyAuthConfig {
    pub header: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SingleUserAuthConfig {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "host:port".
    #[must_use]
    pub fn serve_origin(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            self.serve_origin()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Locking and addressing behaviour of the DAV gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DavConfig {
    /// Upper bound (seconds) used for `Timeout: infinite` and `Second-<n>` candidates.
    pub maximum_lock_timeout: u64,
    /// Used when none of the `Timeout` candidates resolve.
    pub default_lock_timeout: u64,
    /// Resolve the target principal from an email address in the final path segment.
    pub allow_by_email: bool,
}

impl Default for DavConfig {
    fn default() -> Self {
        Self {
            maximum_lock_timeout: DEFAULT_MAXIMUM_LOCK_TIMEOUT,
            default_lock_timeout: DEFAULT_LOCK_TIMEOUT,
            allow_by_email: false,
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("database.max_connections", 4)?
            .set_default("logging.level", "debug")?
            .set_default("auth.method", "proxy")?
            .set_default("auth.proxy.header", "X-Remote-User")?
            .set_default("dav.maximum_lock_timeout", DEFAULT_MAXIMUM_LOCK_TIMEOUT)?
            .set_default("dav.default_lock_timeout", DEFAULT_LOCK_TIMEOUT)?
            .set_default("dav.allow_by_email", false)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env, e.g. KUNAI_DATABASE__URL
            .add_source(
                config::Environment::with_prefix("KUNAI")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
