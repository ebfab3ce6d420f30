//! Extract and validate an imovel request body.

use crate::error::AppError;
use crate::model::ImovelInput;
use crate::service::RequestValidator;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::Value;

/// A request body that passed `RequestValidator`.
#[derive(Clone, Debug)]
pub struct ImovelBody(pub ImovelInput);

#[async_trait]
impl<S> FromRequest<S> for ImovelBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge
            } else {
                AppError::Validation("JSON invalido".into())
            }
        })?;
        RequestValidator::validate(&value).map(ImovelBody)
    }
}
