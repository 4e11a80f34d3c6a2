//! Error types for autodoc-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while building a
/// [`TemplateSet`](crate::TemplateSet).
///
/// Any of these is fatal for the whole run: the set is returned fully
/// populated or not at all.
#[derive(Debug, Error)]
pub enum TemplateLoadError {
    /// Filesystem error while walking or reading the template directory.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template failed to parse — tera's diagnostics name the template
    /// and the offending line.
    #[error("template parse error: {0}")]
    Parse(#[from] tera::Error),

    /// Two files resolved to the same template name.
    #[error("duplicate template name '{name}': {} and {}", first.display(), second.display())]
    Duplicate {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// All errors that can arise from rendering a single template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested name is not present in the loaded set.
    #[error("template '{name}' not found in loaded template set")]
    TemplateNotFound { name: String },

    /// Template execution failed against its data.
    #[error("failed to render template '{name}': {source}")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// The rendering payload could not be converted to a tera context.
    #[error("context serialization error: {0}")]
    Context(#[source] tera::Error),
}
