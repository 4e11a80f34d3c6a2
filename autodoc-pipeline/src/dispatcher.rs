//! Task planning and concurrent dispatch.
//!
//! [`plan_tasks`] expands a provider schema into the full set of
//! [`DocumentTask`]s; [`document`] runs them, one worker thread per task,
//! collecting every outcome through a single mpsc completion channel. The
//! channel is unbounded, so no worker ever blocks on send, and the receiver
//! drains exactly as many results as tasks were submitted.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use autodoc_core::types::{ProviderSchema, SchemaKind, SchemaNode};
use autodoc_renderer::{ConfigContext, SchemaContext, TemplateSet};

use crate::error::DocError;
use crate::task::{DocumentTask, TaskKind, TaskPayload, TaskResult};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Logical document role → template name.
///
/// Bindings resolve against the extension-stripped names in the loaded
/// [`TemplateSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBindings {
    /// mkdocs configuration file.
    pub config: String,
    /// Provider index document.
    pub index: String,
    /// Per-resource document.
    pub resource: String,
    /// Per-data-source document.
    pub data_source: String,
}

impl Default for TemplateBindings {
    fn default() -> Self {
        TemplateBindings {
            config: "mkdocs.yml".to_string(),
            index: "index.md".to_string(),
            resource: "resource.md".to_string(),
            data_source: "datasource.md".to_string(),
        }
    }
}

/// Settings for one documentation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Display name of the provider being documented.
    pub provider_name: String,
    /// Directory receiving `mkdocs.yml`; the docs tree nests beneath it.
    pub root_dir: PathBuf,
    /// Name of the documentation directory under `root_dir`.
    pub docs_dir: String,
    pub bindings: TemplateBindings,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            provider_name: "Terraform Provider".to_string(),
            root_dir: PathBuf::from("."),
            docs_dir: "docs".to_string(),
            bindings: TemplateBindings::default(),
        }
    }
}

/// [`RunConfig`] plus the template source location, for the one-call
/// [`generate`] entry point.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory searched recursively for template files.
    pub templates_dir: PathBuf,
    /// File extension identifying template files.
    pub template_ext: String,
    pub run: RunConfig,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            templates_dir: PathBuf::from("templates"),
            template_ext: ".template".to_string(),
            run: RunConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Planning
// ---------------------------------------------------------------------------

/// Expand `schema` into the full task set:
/// config file + index + one task per resource + one per data source.
///
/// Planning is pure — the task set depends only on the schema and config,
/// never on execution order or filesystem state.
pub fn plan_tasks(schema: &ProviderSchema, config: &RunConfig) -> Vec<DocumentTask> {
    let docs_root = config.root_dir.join(&config.docs_dir);
    let mut tasks = Vec::with_capacity(schema.document_count());

    tasks.push(DocumentTask {
        output_path: config.root_dir.join("mkdocs.yml"),
        template_name: config.bindings.config.clone(),
        payload: TaskPayload::Config(ConfigContext::new(
            config.provider_name.clone(),
            config.docs_dir.clone(),
        )),
        kind: TaskKind::Config,
    });

    tasks.push(DocumentTask {
        output_path: docs_root.join("index.md"),
        template_name: config.bindings.index.clone(),
        payload: schema_payload(
            config.provider_name.clone(),
            SchemaKind::Provider,
            schema.provider.clone(),
        ),
        kind: TaskKind::Index,
    });

    for (name, fields) in &schema.resources {
        tasks.push(DocumentTask {
            output_path: docs_root.join("resources").join(format!("{name}.md")),
            template_name: config.bindings.resource.clone(),
            payload: schema_payload(name.clone(), SchemaKind::Resource, fields.clone()),
            kind: TaskKind::Resource,
        });
    }

    for (name, fields) in &schema.data_sources {
        tasks.push(DocumentTask {
            output_path: docs_root.join("data-sources").join(format!("{name}.md")),
            template_name: config.bindings.data_source.clone(),
            payload: schema_payload(name.clone(), SchemaKind::DataSource, fields.clone()),
            kind: TaskKind::DataSource,
        });
    }

    tasks
}

fn schema_payload(
    name: String,
    kind: SchemaKind,
    fields: Vec<autodoc_core::types::Field>,
) -> TaskPayload {
    TaskPayload::Schema(SchemaContext::from_node(&SchemaNode { name, kind, fields }))
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run every task for `schema` concurrently and return the aggregated error
/// list. An empty list signals total success.
///
/// Errors appear in worker completion order, which is nondeterministic and
/// unrelated to schema order. Tasks never short-circuit each other: one
/// document's failure leaves every sibling document intact.
pub fn document(
    schema: &ProviderSchema,
    templates: &TemplateSet,
    config: &RunConfig,
) -> Vec<DocError> {
    run_tasks(plan_tasks(schema, config), templates)
}

fn run_tasks(tasks: Vec<DocumentTask>, templates: &TemplateSet) -> Vec<DocError> {
    let total = tasks.len();
    let (tx, rx) = mpsc::channel::<TaskResult>();
    let mut errors = Vec::new();

    thread::scope(|scope| {
        for task in tasks {
            let tx = tx.clone();
            scope.spawn(move || {
                tracing::debug!("task {}: {}", task.kind, task.output_path.display());
                // Exactly one send per worker; the drain below counts on it.
                let _ = tx.send(task.run(templates));
            });
        }
        drop(tx);

        for _ in 0..total {
            let result = rx
                .recv()
                .expect("a worker exited without reporting a result");
            if let Some(err) = result.error {
                errors.push(err);
            }
        }
    });

    errors
}

/// One-call entry point: build the template set, then [`document`].
///
/// A template-load failure is fatal — it is returned as the sole element of
/// the list and no task is submitted.
pub fn generate(schema: &ProviderSchema, config: &GenerateConfig) -> Vec<DocError> {
    let templates = match TemplateSet::load(&config.templates_dir, &config.template_ext) {
        Ok(set) => set,
        Err(e) => return vec![DocError::Load(e)],
    };
    document(schema, &templates, &config.run)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
