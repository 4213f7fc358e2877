// src/state.rs
use std::sync::Arc;

use crate::config::Config;

/// Shared, read-only application state. Data files are loaded per request, never cached here.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config) }
    }
}
