//! Error types for autodoc-pipeline.

use std::path::PathBuf;

use thiserror::Error;

use autodoc_core::error::SchemaError;
use autodoc_renderer::{RenderError, TemplateLoadError};

/// All errors a documentation run can report.
///
/// `Schema` and `Load` are fatal — no task is submitted once either occurs,
/// and the run's result list carries the failure as its sole element.
/// `Render` and `Write` are per-task: one task's failure never prevents the
/// others from running to completion.
#[derive(Debug, Error)]
pub enum DocError {
    /// The provider schema document could not be loaded.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The template set could not be built.
    #[error("template load error: {0}")]
    Load(#[from] TemplateLoadError),

    /// A task's template lookup or execution failed, annotated with the
    /// output document it was producing.
    #[error("render error for {path}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    /// A task's output file could not be written.
    #[error("write error at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`DocError::Render`].
pub(crate) fn render_err(path: impl Into<PathBuf>, source: RenderError) -> DocError {
    DocError::Render {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`DocError::Write`].
pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> DocError {
    DocError::Write {
        path: path.into(),
        source,
    }
}
