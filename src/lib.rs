//! Imoveis API: CRUD over a MySQL table of real-estate property records.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DbConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{Imovel, ImovelInput};
pub use routes::{app, common_routes, common_routes_with_ready, imovel_routes};
pub use service::{ImovelRepository, MySqlImovelRepository, RequestValidator};
pub use state::AppState;
pub use store::{ensure_imoveis_table, ConnectionProvider};
