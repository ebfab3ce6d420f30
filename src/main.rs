//! Imoveis API server: reads DB_* settings from the environment (and `.env`), serves the imoveis routes.

use imoveis_api::{app, ensure_imoveis_table, AppConfig, AppState, ConnectionProvider, MySqlImovelRepository};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("imoveis_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        host = %config.db.host,
        port = config.db.port,
        database = %config.db.database,
        tls_ca = config.db.tls_ca_path.is_some(),
        "database settings loaded"
    );

    let provider = ConnectionProvider::new(&config.db);
    if config.db.ensure_table {
        ensure_imoveis_table(&provider).await?;
    }

    let state = AppState::new(MySqlImovelRepository::new(provider));
    let router = app(state, config.server.request_timeout);

    let listener = TcpListener::bind(&config.server.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}
