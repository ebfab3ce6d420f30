//! Connection provider for the MySQL store: one verified connection per operation, no pooling.
//! Also holds the bootstrap DDL for the imoveis table.

use crate::config::DbConfig;
use crate::error::AppError;
use crate::sql;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection, MySqlSslMode};
use sqlx::{ConnectOptions, Connection};
use std::future::Future;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct ConnectionProvider {
    options: MySqlConnectOptions,
    connect_timeout: Duration,
    statement_timeout: Duration,
}

impl ConnectionProvider {
    pub fn new(config: &DbConfig) -> Self {
        let mut options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);
        options = match &config.tls_ca_path {
            Some(ca) => options.ssl_mode(MySqlSslMode::VerifyCa).ssl_ca(ca),
            None => options.ssl_mode(MySqlSslMode::Preferred),
        };
        ConnectionProvider {
            options,
            connect_timeout: config.connect_timeout,
            statement_timeout: config.statement_timeout,
        }
    }

    /// Open a connection and verify it is live. Fails with `Connection` on driver errors
    /// (auth, unreachable host, TLS) and `Timeout` when the connect deadline passes.
    pub async fn acquire(&self) -> Result<MySqlConnection, AppError> {
        let connect = async {
            let mut conn = self.options.connect().await?;
            conn.ping().await?;
            Ok::<_, sqlx::Error>(conn)
        };
        match tokio::time::timeout(self.connect_timeout, connect).await {
            Ok(Ok(conn)) => Ok(conn),
            Ok(Err(e)) => {
                tracing::error!(error = %e, "database connection failed");
                Err(AppError::Connection(e.to_string()))
            }
            Err(_) => {
                tracing::error!(timeout = ?self.connect_timeout, "database connection timed out");
                Err(AppError::Timeout("connect"))
            }
        }
    }

    /// Close the connection. Close failures are logged and otherwise ignored.
    pub async fn release(&self, conn: MySqlConnection) {
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "closing database connection failed");
        }
    }

    /// Run statement work under the statement deadline.
    pub async fn bounded<T, F>(&self, work: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>>,
    {
        tokio::time::timeout(self.statement_timeout, work)
            .await
            .map_err(|_| AppError::Timeout("statement"))?
    }
}

/// Create the imoveis table if it does not exist.
pub async fn ensure_imoveis_table(provider: &ConnectionProvider) -> Result<(), AppError> {
    let mut conn = provider.acquire().await?;
    let ddl = sql::create_table();
    let result = provider
        .bounded(async {
            sqlx::query(&ddl).execute(&mut conn).await?;
            Ok::<_, AppError>(())
        })
        .await;
    provider.release(conn).await;
    if result.is_ok() {
        tracing::info!(table = sql::TABLE, "table ensured");
    }
    result
}
