//! Tera template set — recursive discovery, compilation, named rendering.
//!
//! Template names are the base file name with the configured extension
//! stripped: `templates/nested/resource.md.template` loads as `resource.md`.
//! Directory structure is free-form; only the resolved name matters, and a
//! name collision between two files is a load-time error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use crate::error::{RenderError, TemplateLoadError};

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> TemplateLoadError {
    TemplateLoadError::Io { path: path.into(), source }
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), TemplateLoadError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

/// Resolved template name for `path`: base file name with `extension`
/// stripped. `None` when the file does not carry the extension, or when
/// stripping it leaves nothing.
fn template_name(path: &Path, extension: &str) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(extension)?;
    if stem.is_empty() {
        return None;
    }
    Some(stem.to_string())
}

/// An immutable mapping from template name to compiled tera template.
///
/// Built once with [`TemplateSet::load`] and then shared read-only —
/// `&TemplateSet` is safe to hand to concurrent workers.
#[derive(Debug)]
pub struct TemplateSet {
    tera: Tera,
}

impl TemplateSet {
    /// Recursively load every `*{extension}` file under `root` and compile
    /// the lot as one tera set.
    ///
    /// Fails if `root` is unreadable, if two files resolve to the same
    /// template name, or if any template fails to parse. On failure no
    /// partial set is observable.
    pub fn load(root: &Path, extension: &str) -> Result<Self, TemplateLoadError> {
        let mut files = Vec::new();
        collect_template_files(root, &mut files)?;
        // Walk order is filesystem-dependent; sort for stable error attribution.
        files.sort();

        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        let mut sources: Vec<(String, String)> = Vec::new();
        for path in files {
            let Some(name) = template_name(&path, extension) else {
                continue;
            };
            if let Some(first) = seen.get(&name) {
                return Err(TemplateLoadError::Duplicate {
                    name,
                    first: first.clone(),
                    second: path,
                });
            }
            let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
            seen.insert(name.clone(), path);
            sources.push((name, contents));
        }

        // One batch add so templates may include/extend one another.
        let mut tera = Tera::default();
        tera.add_raw_templates(sources)?;
        Ok(TemplateSet { tera })
    }

    /// Whether `name` is registered in this set.
    pub fn contains(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// All registered template names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tera.get_template_names().map(String::from).collect();
        names.sort();
        names
    }

    /// Render the template registered under `name` against `context`.
    pub fn render(&self, name: &str, context: &tera::Context) -> Result<String, RenderError> {
        if !self.contains(name) {
            return Err(RenderError::TemplateNotFound {
                name: name.to_string(),
            });
        }
        self.tera.render(name, context).map_err(|e| RenderError::Render {
            name: name.to_string(),
            source: e,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
