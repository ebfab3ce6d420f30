//! Success response envelopes.

use crate::model::Imovel;
use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Collection payload: `{"imovel": [...]}`.
#[derive(Serialize)]
pub struct ImovelList {
    pub imovel: Vec<Imovel>,
}

/// Action confirmation: `{"mensagem": "..."}`, plus the new id on create.
#[derive(Serialize)]
pub struct Mensagem {
    pub mensagem: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

pub const MSG_CRIADO: &str = "imovel criado com sucesso";
pub const MSG_ATUALIZADO: &str = "imovel atualizado com sucesso";
pub const MSG_REMOVIDO: &str = "Imóvel removido com sucesso.";

pub fn success_many(imovel: Vec<Imovel>) -> (StatusCode, Json<ImovelList>) {
    (StatusCode::OK, Json(ImovelList { imovel }))
}

pub fn success_one(imovel: Imovel) -> (StatusCode, Json<Imovel>) {
    (StatusCode::OK, Json(imovel))
}

pub fn mensagem(status: StatusCode, mensagem: &'static str) -> (StatusCode, Json<Mensagem>) {
    (status, Json(Mensagem { mensagem, id: None }))
}

pub fn created(id: i64) -> (StatusCode, Json<Mensagem>) {
    (
        StatusCode::OK,
        Json(Mensagem {
            mensagem: MSG_CRIADO,
            id: Some(id),
        }),
    )
}
