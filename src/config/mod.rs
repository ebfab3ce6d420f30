pub mod types;
mod loader;

pub use types::*;
