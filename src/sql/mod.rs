//! Fixed SQL for the imoveis table: identifiers are constants, values are parameters.

mod statements;
pub use statements::*;
