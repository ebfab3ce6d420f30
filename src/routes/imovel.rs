//! Imovel routes. Static segments (`cidade`, `delete`) take priority over `:id`.

use crate::handlers::imovel::{create, delete, list, list_by_cidade, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn imovel_routes(state: AppState) -> Router {
    Router::new()
        .route("/imoveis", get(list).post(create))
        .route("/imoveis/cidade/:cidade", get(list_by_cidade))
        .route("/imoveis/delete/:id", axum::routing::delete(delete))
        .route("/imoveis/:id", get(read).put(update))
        .with_state(state)
}
