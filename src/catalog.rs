//! Model catalog loading
//!
//! The catalog is a JSON object mapping model names to display attributes,
//! kept next to the glasses meshes under the static directory. It is read
//! fresh on every request; there is no in-memory copy to invalidate.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Model name -> opaque display attributes.
///
/// Attribute values are pass-through data for the fitting page; nothing in
/// the server assumes fields beyond what the display step renders.
pub type Catalog = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog file {path:?} is not a JSON object of models: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse the catalog file. One filesystem read per call.
pub async fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
