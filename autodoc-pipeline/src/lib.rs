//! # autodoc-pipeline
//!
//! Concurrent documentation generation: expand a provider schema into one
//! task per output document, run every task on its own worker thread against
//! a shared read-only [`TemplateSet`](autodoc_renderer::TemplateSet), and
//! aggregate all outcomes into a single error list.
//!
//! Call [`generate`] for the one-call entry point (template loading
//! included), or [`document`] with an already-built set.

pub mod dispatcher;
pub mod error;
pub mod task;
pub mod writer;

pub use dispatcher::{document, generate, plan_tasks, GenerateConfig, RunConfig, TemplateBindings};
pub use error::DocError;
pub use task::{DocumentTask, TaskKind, TaskPayload, TaskResult};
pub use writer::{write_document, WriteResult};
