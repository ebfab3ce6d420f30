//! Load configuration from environment variables (optionally seeded from `.env` by the binary).

use crate::config::types::{AppConfig, DbConfig, ServerConfig};
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(AppConfig {
            db: DbConfig::from_lookup(&lookup)?,
            server: ServerConfig::from_lookup(&lookup)?,
        })
    }
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DbConfig::default();
        Ok(DbConfig {
            host: non_empty(&lookup, "DB_HOST").unwrap_or(defaults.host),
            user: lookup("DB_USER").unwrap_or_default(),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            database: non_empty(&lookup, "DB_NAME").unwrap_or(defaults.database),
            port: parsed(&lookup, "DB_PORT")?.unwrap_or(defaults.port),
            tls_ca_path: non_empty(&lookup, "SSL_CA_PATH"),
            connect_timeout: seconds(&lookup, "DB_CONNECT_TIMEOUT_SECS")?.unwrap_or(defaults.connect_timeout),
            statement_timeout: seconds(&lookup, "DB_STATEMENT_TIMEOUT_SECS")?.unwrap_or(defaults.statement_timeout),
            ensure_table: flag(&lookup, "DB_ENSURE_TABLE")?,
        })
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        Ok(ServerConfig {
            bind_addr: non_empty(&lookup, "BIND_ADDR").unwrap_or(defaults.bind_addr),
            request_timeout: seconds(&lookup, "REQUEST_TIMEOUT_SECS")?.unwrap_or(defaults.request_timeout),
        })
    }
}

fn non_empty<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parsed<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_empty(lookup, var) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

fn seconds<F>(lookup: &F, var: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(parsed::<_, u64>(lookup, var)?.map(Duration::from_secs))
}

fn flag<F>(lookup: &F, var: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, var) {
        None => Ok(false),
        Some(raw) => match raw.to_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" => Ok(false),
            _ => Err(ConfigError::Invalid { var, value: raw }),
        },
    }
}
