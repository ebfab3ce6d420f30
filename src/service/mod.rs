//! Data access and request validation for imoveis.

mod crud;
mod validation;
pub use crud::{ImovelRepository, MySqlImovelRepository};
pub use validation::RequestValidator;
