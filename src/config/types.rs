//! Immutable configuration values. Built once at startup and passed by value.

use std::time::Duration;

pub const DEFAULT_DB_HOST: &str = "127.0.0.1";
pub const DEFAULT_DB_NAME: &str = "defaultdb";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Connection settings for the MySQL store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    /// CA certificate used to verify the server. When unset, TLS is opportunistic.
    pub tls_ca_path: Option<String>,
    pub connect_timeout: Duration,
    pub statement_timeout: Duration,
    /// Create the imoveis table at startup if missing.
    pub ensure_table: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        DbConfig {
            host: DEFAULT_DB_HOST.into(),
            user: String::new(),
            password: String::new(),
            database: DEFAULT_DB_NAME.into(),
            port: DEFAULT_DB_PORT,
            tls_ca_path: None,
            connect_timeout: Duration::from_secs(5),
            statement_timeout: Duration::from_secs(10),
            ensure_table: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub db: DbConfig,
    pub server: ServerConfig,
}
