//! Shared application state
//!
//! The `AppState` carries only resolved configuration. The catalog itself
//! is re-read from disk on every request, so no mutable data is shared
//! between requests.

use std::path::PathBuf;

/// Shared state for the page handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog_path: PathBuf,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(catalog_path: PathBuf, static_dir: PathBuf) -> Self {
        Self {
            catalog_path,
            static_dir,
        }
    }
}
