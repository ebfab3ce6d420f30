//! Operational routes that sit beside `/imoveis`: liveness, store readiness and build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Liveness only; never touches MySQL.
#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Readiness: whether a fresh store connection can be opened right now.
#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn liveness() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match state.repo.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Readiness {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health and GET /version for the imoveis service. Stateless.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/version", get(build_info))
}

/// Adds GET /ready, which opens and closes one MySQL connection per call.
pub fn common_routes_with_ready(state: AppState) -> Router {
    common_routes().merge(
        Router::new()
            .route("/ready", get(readiness))
            .with_state(state),
    )
}
