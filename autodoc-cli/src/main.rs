//! autodoc — generate mkdocs-style provider documentation from templates.
//!
//! # Usage
//!
//! ```text
//! autodoc --schema provider.json [--provider-name NAME] [--root DIR]
//!         [--docs-dir NAME] [--templates-dir DIR] [--template-ext EXT]
//! ```
//!
//! Let `$(root)` be the value of `--root` and `$(docs)` the value of
//! `--docs-dir`. One run produces:
//!
//! 1. `$(root)/mkdocs.yml` — mkdocs configuration
//! 2. `$(root)/$(docs)/index.md` — provider documentation
//! 3. `$(root)/$(docs)/resources/*.md` — one file per resource
//! 4. `$(root)/$(docs)/data-sources/*.md` — one file per data source
//!
//! Template associations (with the default `.template` extension):
//!
//! - `mkdocs.yml.template` → `mkdocs.yml`
//! - `index.md.template` → `index.md`
//! - `resource.md.template` → every resource document
//! - `datasource.md.template` → every data-source document
//!
//! Exits 0 on success, 1 on any error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use autodoc_core::schema;
use autodoc_pipeline::{generate, DocError, GenerateConfig, RunConfig, TemplateBindings};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "autodoc",
    version,
    about = "Generate mkdocs-style documentation for a Terraform provider",
    long_about = None,
)]
struct Cli {
    /// Provider schema JSON document.
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,

    /// Display name of the provider.
    #[arg(long, default_value = "Terraform Provider", value_name = "NAME")]
    provider_name: String,

    /// Root directory for generated output; mkdocs.yml is placed here.
    #[arg(long, default_value = ".", value_name = "DIR")]
    root: PathBuf,

    /// Name of the documentation directory under the root.
    #[arg(long, default_value = "docs", value_name = "NAME")]
    docs_dir: String,

    /// Directory searched recursively for template files.
    #[arg(long, default_value = "templates", value_name = "DIR")]
    templates_dir: PathBuf,

    /// File extension identifying template files.
    #[arg(long, default_value = ".template", value_name = "EXT")]
    template_ext: String,
}

impl Cli {
    /// Run the full pipeline; every error encountered ends up in the list.
    fn run(self) -> Vec<DocError> {
        let schema = match schema::load_at(&self.schema) {
            Ok(schema) => schema,
            Err(e) => return vec![DocError::Schema(e)],
        };

        let document_count = schema.document_count();
        let config = GenerateConfig {
            templates_dir: self.templates_dir,
            template_ext: self.template_ext,
            run: RunConfig {
                provider_name: self.provider_name,
                root_dir: self.root.clone(),
                docs_dir: self.docs_dir,
                bindings: TemplateBindings::default(),
            },
        };

        let errors = generate(&schema, &config);
        if errors.is_empty() {
            println!(
                "✓ generated {document_count} documentation files under {}",
                self.root.display()
            );
        }
        errors
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version print to stdout and exit 0; any argument error
        // exits 1 per the documented contract, not clap's default 2.
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    let errors = cli.run();
    if errors.is_empty() {
        return ExitCode::SUCCESS;
    }
    for error in &errors {
        eprintln!("{} {error}", "error:".red().bold());
    }
    eprintln!("{} error(s) encountered", errors.len());
    ExitCode::FAILURE
}
