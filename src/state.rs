//! Shared application state. Holds no request data; the store is the only shared resource.

use crate::service::ImovelRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ImovelRepository>,
}

impl AppState {
    pub fn new<R: ImovelRepository + 'static>(repo: R) -> Self {
        AppState { repo: Arc::new(repo) }
    }
}
