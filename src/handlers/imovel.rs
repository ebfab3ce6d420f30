//! Imovel handlers: list, list by city, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{Cidade, ImovelBody, ImovelId};
use crate::response::{self, MSG_ATUALIZADO, MSG_REMOVIDO};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.repo.list().await?;
    if rows.is_empty() {
        return Err(AppError::NotFound("Nenhum imovel encontrado".into()));
    }
    Ok(response::success_many(rows))
}

pub async fn list_by_cidade(
    State(state): State<AppState>,
    Cidade(cidade): Cidade,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.repo.list_by_cidade(&cidade).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound("Nenhum imovel encontrado nessa cidade".into()));
    }
    Ok(response::success_many(rows))
}

pub async fn read(
    State(state): State<AppState>,
    ImovelId(id): ImovelId,
) -> Result<impl IntoResponse, AppError> {
    let row = state
        .repo
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Imovel nao encontrado".into()))?;
    Ok(response::success_one(row))
}

pub async fn create(
    State(state): State<AppState>,
    ImovelBody(input): ImovelBody,
) -> Result<impl IntoResponse, AppError> {
    let id = state.repo.create(&input).await?;
    tracing::info!(id, "imovel created");
    Ok(response::created(id))
}

pub async fn update(
    State(state): State<AppState>,
    ImovelId(id): ImovelId,
    ImovelBody(input): ImovelBody,
) -> Result<impl IntoResponse, AppError> {
    if !state.repo.update(id, &input).await? {
        return Err(AppError::NotFound("Imovel nao encontrado".into()));
    }
    tracing::info!(id, "imovel updated");
    Ok(response::mensagem(StatusCode::CREATED, MSG_ATUALIZADO))
}

pub async fn delete(
    State(state): State<AppState>,
    ImovelId(id): ImovelId,
) -> Result<impl IntoResponse, AppError> {
    if !state.repo.delete(id).await? {
        return Err(AppError::NotFound("Imovel nao encontrado".into()));
    }
    tracing::info!(id, "imovel deleted");
    Ok(response::mensagem(StatusCode::OK, MSG_REMOVIDO))
}
