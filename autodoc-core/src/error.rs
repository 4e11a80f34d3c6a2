//! Error types for autodoc-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from schema loading.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The schema document did not exist at the expected path.
    #[error("schema not found at {path}")]
    SchemaNotFound { path: PathBuf },

    /// JSON parse error on load — includes file path and line context from serde_json.
    #[error("failed to parse schema at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
