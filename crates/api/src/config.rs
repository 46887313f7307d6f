use std::net::IpAddr;

use axum::http::HeaderValue;
use transit_db::{AppEnvironment, DatabaseConfig, DbConfigError};

/// Log output format, read from `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(transparent)]
    Database(#[from] DbConfigError),

    #[error("{var} has an invalid value: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Apply migrations at startup (default: on in development, off in production).
    pub run_migrations: bool,
    pub log_format: LogFormat,
}

/// Everything the binary needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseConfig::from_lookup(&lookup)?;
        let server = ServerConfig::from_lookup(&lookup, database.environment)?;
        Ok(Self { server, database })
    }
}

impl ServerConfig {
    /// Load configuration with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | `3000`                          |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`         |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                            |
    /// | `RUN_MIGRATIONS`       | `true` unless production        |
    /// | `LOG_FORMAT`           | `pretty` (`json` also accepted) |
    pub fn from_lookup<F>(lookup: F, environment: AppEnvironment) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or("HOST", lookup("HOST"), "0.0.0.0".parse().ok())?;
        let port = parse_or("PORT", lookup("PORT"), Some(3000))?;
        let request_timeout_secs = parse_or(
            "REQUEST_TIMEOUT_SECS",
            lookup("REQUEST_TIMEOUT_SECS"),
            Some(30),
        )?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|_| ConfigError::InvalidValue {
                        var: "CORS_ORIGINS",
                        value: o.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(raw) => parse_bool("RUN_MIGRATIONS", &raw)?,
            None => !environment.is_production(),
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    var: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            run_migrations,
            log_format,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: Option<T>,
) -> Result<T, ConfigError> {
    match raw {
        Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var,
            value: v.clone(),
        }),
        None => default.ok_or(ConfigError::InvalidValue {
            var,
            value: String::new(),
        }),
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
        }),
    }
}
