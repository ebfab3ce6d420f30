//! Typed errors and HTTP mapping. Every error body is `{"erro": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("connection: {0}")]
    Connection(String),
    #[error("timeout: {0}")]
    Timeout(&'static str),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("request body exceeds limit")]
    PayloadTooLarge,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub erro: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Connection(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// Message shown to clients. Driver details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Connection(_) => "Erro ao conectar ao banco de dados".into(),
            AppError::Timeout(_) => "Tempo limite excedido ao acessar o banco de dados".into(),
            AppError::Db(_) => "Erro ao acessar o banco de dados".into(),
            AppError::PayloadTooLarge => "Corpo da requisicao excede o limite permitido".into(),
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Connection(_) | AppError::Db(_) | AppError::Timeout(_) => {
                tracing::error!(error = %self, "request failed");
            }
            AppError::NotFound(_) | AppError::Validation(_) | AppError::PayloadTooLarge => {
                tracing::debug!(error = %self, "request rejected");
            }
        }
        error_response(self.status(), self.public_message())
    }
}

/// `{"erro": ...}` with the given status. Also used for responses produced outside the handlers.
pub fn error_response(status: StatusCode, erro: impl Into<String>) -> Response {
    (status, Json(ErrorBody { erro: erro.into() })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn connection_error_is_500_with_fixed_message() {
        let (status, body) = body_json(AppError::Connection("Access denied for user 'x'".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "erro": "Erro ao conectar ao banco de dados" }));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = body_json(AppError::NotFound("Nenhum imovel encontrado".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["erro"], "Nenhum imovel encontrado");
    }

    #[tokio::test]
    async fn validation_is_400() {
        let (status, body) = body_json(AppError::Validation("campo obrigatorio ausente: cep".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["erro"], "campo obrigatorio ausente: cep");
    }

    #[tokio::test]
    async fn timeout_is_503() {
        let (status, _) = body_json(AppError::Timeout("connect")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn oversized_body_is_413() {
        let (status, body) = body_json(AppError::PayloadTooLarge).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["erro"], "Corpo da requisicao excede o limite permitido");
    }

    #[tokio::test]
    async fn driver_error_does_not_leak() {
        let (status, body) = body_json(AppError::Db(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["erro"], "Erro ao acessar o banco de dados");
    }
}
