//! Database connection configuration.
//!
//! The connection strategy is decided once, when the configuration is
//! loaded, and handed to the provider. Nothing below this module looks at
//! the deployment environment again.

use std::fmt;
use std::str::FromStr;

/// Pool cap used for the direct development connection.
pub const DEV_MAX_CONNECTIONS: u32 = 5;

/// Deployment environment, read from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Production,
}

impl AppEnvironment {
    pub fn is_production(self) -> bool {
        matches!(self, AppEnvironment::Production)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEnvironment::Development => f.write_str("development"),
            AppEnvironment::Production => f.write_str("production"),
        }
    }
}

impl FromStr for AppEnvironment {
    type Err = DbConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnvironment::Development),
            "production" | "prod" => Ok(AppEnvironment::Production),
            other => Err(DbConfigError::InvalidValue {
                var: "APP_ENV",
                value: other.to_string(),
            }),
        }
    }
}

/// How the process connects to the database.
#[derive(Clone, PartialEq, Eq)]
pub enum ConnectionStrategy {
    /// Production: connect through a pooling endpoint, pool sized by the
    /// driver defaults.
    Pooled { url: String },
    /// Development: connect straight to the database with a small pool.
    Direct { url: String, max_connections: u32 },
}

impl ConnectionStrategy {
    pub fn url(&self) -> &str {
        match self {
            ConnectionStrategy::Pooled { url } | ConnectionStrategy::Direct { url, .. } => url,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ConnectionStrategy::Pooled { .. } => "pooled",
            ConnectionStrategy::Direct { .. } => "direct",
        }
    }
}

// Connection strings carry credentials; keep them out of logs.
impl fmt::Debug for ConnectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStrategy::Pooled { .. } => f
                .debug_struct("Pooled")
                .field("url", &"<redacted>")
                .finish(),
            ConnectionStrategy::Direct {
                max_connections, ..
            } => f
                .debug_struct("Direct")
                .field("url", &"<redacted>")
                .field("max_connections", max_connections)
                .finish(),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DbConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("{var} has an invalid value: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

/// Database configuration resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub environment: AppEnvironment,
    pub strategy: ConnectionStrategy,
}

impl DatabaseConfig {
    /// Load configuration from process environment variables.
    ///
    /// | Env Var               | Used when    | Default       |
    /// |-----------------------|--------------|---------------|
    /// | `APP_ENV`             | always       | `development` |
    /// | `POOLED_DATABASE_URL` | production   | required      |
    /// | `DATABASE_URL`        | development  | required      |
    /// | `DB_MAX_CONNECTIONS`  | development  | `5`           |
    pub fn from_env() -> Result<Self, DbConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match non_empty(lookup("APP_ENV")) {
            Some(raw) => raw.parse()?,
            None => AppEnvironment::default(),
        };

        let strategy = match environment {
            AppEnvironment::Production => ConnectionStrategy::Pooled {
                url: non_empty(lookup("POOLED_DATABASE_URL"))
                    .ok_or(DbConfigError::MissingVar("POOLED_DATABASE_URL"))?,
            },
            AppEnvironment::Development => {
                let url = non_empty(lookup("DATABASE_URL"))
                    .ok_or(DbConfigError::MissingVar("DATABASE_URL"))?;
                let max_connections = match non_empty(lookup("DB_MAX_CONNECTIONS")) {
                    Some(raw) => raw
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or(DbConfigError::InvalidValue {
                            var: "DB_MAX_CONNECTIONS",
                            value: raw,
                        })?,
                    None => DEV_MAX_CONNECTIONS,
                };
                ConnectionStrategy::Direct {
                    url,
                    max_connections,
                }
            }
        };

        Ok(Self {
            environment,
            strategy,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
