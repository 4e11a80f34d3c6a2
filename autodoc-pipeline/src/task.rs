//! Task model — one unit of work per output document.

use std::fmt;
use std::path::{Path, PathBuf};

use autodoc_renderer::{ConfigContext, SchemaContext, TemplateSet};

use crate::error::{render_err, DocError};
use crate::writer::{self, WriteResult};

/// The role of a task within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Config,
    Index,
    Resource,
    DataSource,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Config => write!(f, "config"),
            TaskKind::Index => write!(f, "index"),
            TaskKind::Resource => write!(f, "resource"),
            TaskKind::DataSource => write!(f, "data-source"),
        }
    }
}

/// Rendering payload carried by a task.
#[derive(Debug, Clone)]
pub enum TaskPayload {
    Config(ConfigContext),
    Schema(SchemaContext),
}

/// One unit of work: render `template_name` against `payload` and write the
/// result to `output_path`.
///
/// Constructed by the dispatcher and consumed exactly once by the worker
/// that runs it — [`DocumentTask::run`] takes ownership.
#[derive(Debug, Clone)]
pub struct DocumentTask {
    pub output_path: PathBuf,
    pub template_name: String,
    pub payload: TaskPayload,
    pub kind: TaskKind,
}

/// Outcome of a single task, deposited on the completion channel.
#[derive(Debug)]
pub struct TaskResult {
    pub kind: TaskKind,
    pub output_path: PathBuf,
    pub error: Option<DocError>,
}

impl DocumentTask {
    /// Execute the task: render, then write. Never panics on task failure —
    /// every error ends up in the returned [`TaskResult`].
    pub fn run(self, templates: &TemplateSet) -> TaskResult {
        let DocumentTask {
            output_path,
            template_name,
            payload,
            kind,
        } = self;
        let error = execute(&output_path, &template_name, &payload, templates).err();
        TaskResult {
            kind,
            output_path,
            error,
        }
    }
}

fn execute(
    output_path: &Path,
    template_name: &str,
    payload: &TaskPayload,
    templates: &TemplateSet,
) -> Result<WriteResult, DocError> {
    let ctx = match payload {
        TaskPayload::Config(c) => c.to_tera_context(),
        TaskPayload::Schema(s) => s.to_tera_context(),
    }
    .map_err(|e| render_err(output_path, e))?;
    let content = templates
        .render(template_name, &ctx)
        .map_err(|e| render_err(output_path, e))?;
    writer::write_document(output_path, &content)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use autodoc_core::types::{SchemaKind, SchemaNode};
    use autodoc_renderer::RenderError;
    use tempfile::TempDir;

    use super::*;

    fn template_set(dir: &TempDir, name: &str, body: &str) -> TemplateSet {
        fs::write(dir.path().join(format!("{name}.template")), body).expect("write template");
        TemplateSet::load(dir.path(), ".template").expect("load")
    }

    fn schema_payload(name: &str) -> TaskPayload {
        TaskPayload::Schema(SchemaContext::from_node(&SchemaNode {
            name: name.to_string(),
            kind: SchemaKind::Resource,
            fields: vec![],
        }))
    }

    #[test]
    fn task_kind_display() {
        assert_eq!(TaskKind::Config.to_string(), "config");
        assert_eq!(TaskKind::DataSource.to_string(), "data-source");
    }

    #[test]
    fn run_renders_and_writes() {
        let templates_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let set = template_set(&templates_dir, "resource.md", "# {{ name }}");

        let task = DocumentTask {
            output_path: out_dir.path().join("resources").join("acme_widget.md"),
            template_name: "resource.md".to_string(),
            payload: schema_payload("acme_widget"),
            kind: TaskKind::Resource,
        };
        let result = task.run(&set);

        assert!(result.error.is_none(), "unexpected error: {:?}", result.error);
        let written = fs::read_to_string(result.output_path).unwrap();
        assert_eq!(written, "# acme_widget");
    }

    #[test]
    fn run_reports_missing_template_with_output_path() {
        let templates_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let set = template_set(&templates_dir, "index.md", "unused");

        let out_path = out_dir.path().join("resources").join("acme_widget.md");
        let task = DocumentTask {
            output_path: out_path.clone(),
            template_name: "resource.md".to_string(),
            payload: schema_payload("acme_widget"),
            kind: TaskKind::Resource,
        };
        let result = task.run(&set);

        match result.error {
            Some(DocError::Render {
                path,
                source: RenderError::TemplateNotFound { name },
            }) => {
                assert_eq!(path, out_path);
                assert_eq!(name, "resource.md");
            }
            other => panic!("expected TemplateNotFound render error, got {other:?}"),
        }
        assert!(!out_path.exists(), "failed task must not leave output");
    }

    #[test]
    fn run_reports_execution_failure_as_render_error() {
        let templates_dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let set = template_set(&templates_dir, "resource.md", "{{ absent_field }}");

        let task = DocumentTask {
            output_path: out_dir.path().join("widget.md"),
            template_name: "resource.md".to_string(),
            payload: schema_payload("widget"),
            kind: TaskKind::Resource,
        };
        let result = task.run(&set);

        assert!(matches!(
            result.error,
            Some(DocError::Render {
                source: RenderError::Render { .. },
                ..
            })
        ));
    }
}
