//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Deployment environment, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

/// Response cache settings.
///
/// Caching is off unless `CACHE_ENABLED` is set. `endpoint` is the shared
/// cache address taken from `REDIS_HOST`/`REDIS_PORT`; it is only reported,
/// entries always live in the in-process store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Whether the item routes are cached at all
    pub enabled: bool,
    /// `host:port` of the shared cache, when both variables are present
    pub endpoint: Option<String>,
    /// Lifetime of a cached response in seconds
    pub ttl: u64,
    /// Maximum number of cached responses
    pub max_entries: usize,
    /// Interval in seconds between expired-entry sweeps
    pub cleanup_interval: u64,
}

/// Twelve hours.
pub const DEFAULT_CACHE_TTL: u64 = 43_200;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            ttl: DEFAULT_CACHE_TTL,
            max_entries: 1000,
            cleanup_interval: 60,
        }
    }
}

impl CacheConfig {
    /// Loads the cache section from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_ENABLED` - `true`/`1` turns the response cache on (default: off)
    /// - `REDIS_HOST`, `REDIS_PORT` - shared cache endpoint (optional)
    /// - `CACHE_TTL` - entry lifetime in seconds (default: 43200)
    /// - `CACHE_MAX_ENTRIES` - maximum cached responses (default: 1000)
    /// - `CLEANUP_INTERVAL` - sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let endpoint = match (env::var("REDIS_HOST"), env::var("REDIS_PORT")) {
            (Ok(host), Ok(port)) if !host.is_empty() && !port.is_empty() => {
                Some(format!("{}:{}", host, port))
            }
            _ => None,
        };

        Self {
            enabled: env::var("CACHE_ENABLED")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.enabled),
            endpoint,
            ttl: parse_var("CACHE_TTL").unwrap_or(defaults.ttl),
            max_entries: parse_var("CACHE_MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// JSON seed file for the document store
    pub data_path: PathBuf,
    /// Response cache settings
    pub cache: CacheConfig,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `APP_ENV` - `development` or `production` (default: production)
    /// - `DATA_PATH` - document store seed file (default: data/store.json)
    /// - cache variables, see [`CacheConfig::from_env`]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            environment: env::var("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or(defaults.environment),
            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            cache: CacheConfig::from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            environment: Environment::default(),
            data_path: PathBuf::from("data/store.json"),
            cache: CacheConfig::default(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
