//! Router assembly.

mod common;
mod imovel;
pub use common::{common_routes, common_routes_with_ready};
pub use imovel::imovel_routes;

use crate::error::{error_response, AppError};
use crate::state::AppState;
use axum::{
    http::{header, StatusCode},
    middleware::map_response,
    response::{IntoResponse, Response},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Request bodies are single records; anything larger is rejected.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application router: common routes, imovel routes and the middleware stack.
/// Layering, outermost first: trace, JSON error bodies, body limit, request timeout.
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(imovel_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(map_response(json_errors))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> AppError {
    AppError::NotFound("Recurso nao encontrado".into())
}

/// Rewrite error responses that did not come from `AppError` (middleware, method routing)
/// into `{"erro": ...}`. A request timeout is reported like a store timeout.
async fn json_errors(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }
    match status {
        StatusCode::REQUEST_TIMEOUT => AppError::Timeout("request").into_response(),
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge.into_response(),
        StatusCode::NOT_FOUND => not_found().await.into_response(),
        StatusCode::METHOD_NOT_ALLOWED => {
            let allow = response.headers().get(header::ALLOW).cloned();
            let mut mapped = error_response(status, "Metodo nao permitido");
            if let Some(allow) = allow {
                mapped.headers_mut().insert(header::ALLOW, allow);
            }
            mapped
        }
        _ => error_response(status, status.canonical_reason().unwrap_or("Erro")),
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.as_bytes().starts_with(b"application/json"))
        .unwrap_or(false)
}
