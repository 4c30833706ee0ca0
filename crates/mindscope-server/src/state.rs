use std::path::{Path, PathBuf};
use std::sync::Arc;

use mindscope_chat::chain::ResponseChain;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    data_dir: Arc<PathBuf>,
    pub chain: Arc<ResponseChain>,
}

impl AppState {
    pub fn new(data_dir: impl Into<PathBuf>, chain: ResponseChain) -> Self {
        Self {
            data_dir: Arc::new(data_dir.into()),
            chain: Arc::new(chain),
        }
    }

    /// Root of the record store.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
