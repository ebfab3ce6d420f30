//! Request extractors that reject with the JSON error body instead of axum's plain-text rejections.

mod body;
mod cidade;
mod id;
pub use body::ImovelBody;
pub use cidade::Cidade;
pub use id::ImovelId;
