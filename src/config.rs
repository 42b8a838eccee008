use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const ALLOW_ORIGIN_VAR: &str = "HTTP_HEADER_ACCESS_CONTROL_ALLOW_ORIGIN";

/// Output format for log lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub allow_origin: HeaderValue,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub server_addr: SocketAddr,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup(DATABASE_URL_VAR).ok_or(ConfigError::Missing(DATABASE_URL_VAR))?;

        let allow_origin =
            lookup(ALLOW_ORIGIN_VAR).ok_or(ConfigError::Missing(ALLOW_ORIGIN_VAR))?;
        let allow_origin = HeaderValue::from_str(&allow_origin)
            .map_err(|_| ConfigError::Invalid(ALLOW_ORIGIN_VAR, allow_origin))?;

        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;

        let connect_timeout =
            Duration::from_secs(parse_or(&lookup, "DATABASE_CONNECT_TIMEOUT_SECS", 10)?);

        let server_addr =
            parse_or(&lookup, "SERVER_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?;

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => return Err(ConfigError::Invalid("LOG_FORMAT", other.to_string())),
        };

        Ok(Config {
            database_url,
            allow_origin,
            max_connections,
            connect_timeout,
            server_addr,
            log_level,
            log_format,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid(key, raw)),
        None => Ok(default),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required env `{0}` is missing")]
    Missing(&'static str),

    #[error("env `{0}` has an invalid value: {1:?}")]
    Invalid(&'static str, String),
}
