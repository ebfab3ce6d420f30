//! HTTP handlers for the imoveis resource.

pub mod imovel;
pub use imovel::*;
