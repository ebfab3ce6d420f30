//! Extract the city name from the path.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cidade(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for Cidade
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(cidade) = Path::<String>::from_request_parts(parts, state).await.map_err(|e| {
            tracing::debug!(error = %e, "rejected cidade path");
            AppError::Validation("cidade invalida".into())
        })?;
        Ok(Cidade(cidade))
    }
}
