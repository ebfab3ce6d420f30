//! Extract the numeric imovel id from the path.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImovelId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ImovelId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::Validation("id invalido".into()))?;
        raw.trim()
            .parse::<i64>()
            .map(ImovelId)
            .map_err(|_| AppError::Validation("id invalido".into()))
    }
}
